mod numeric_date;
mod validator;

pub use numeric_date::NumericDate;
pub use validator::{validate_claims, validate_claims_at};

use serde::{Deserialize, Serialize};

/// Read access to the registered claims of a claims set
///
/// Implemented by [`RegisteredClaims`] and by any caller-defined claims type that
/// embeds one. Only [`registered`](Claims::registered) has to be written; every
/// getter has a default.
///
/// # Examples
///
/// ```
/// use jwtseal::{Claims, RegisteredClaims};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct SessionClaims {
///     #[serde(flatten)]
///     registered: RegisteredClaims,
///     email: String,
/// }
///
/// impl Claims for SessionClaims {
///     fn registered(&self) -> &RegisteredClaims {
///         &self.registered
///     }
/// }
/// ```
pub trait Claims {
    /// The embedded registered claims
    fn registered(&self) -> &RegisteredClaims;

    /// Expiration Time (`exp`)
    fn expiration_time(&self) -> Option<&NumericDate> {
        self.registered().expires_at.as_ref()
    }

    /// Not Before (`nbf`)
    fn not_before(&self) -> Option<&NumericDate> {
        self.registered().not_before.as_ref()
    }

    /// Issued At (`iat`)
    fn issued_at(&self) -> Option<&NumericDate> {
        self.registered().issued_at.as_ref()
    }

    /// Issuer (`iss`)
    fn issuer(&self) -> Option<&str> {
        self.registered().issuer.as_deref()
    }

    /// Subject (`sub`)
    fn subject(&self) -> Option<&str> {
        self.registered().subject.as_deref()
    }

    /// Audience (`aud`), empty when absent
    fn audience(&self) -> &[String] {
        &self.registered().audience
    }

    /// JWT ID (`jti`)
    fn id(&self) -> Option<&str> {
        self.registered().id.as_deref()
    }
}

/// Registered claims as defined in [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
///
/// Every field is optional on the wire and omitted when unset. Caller-defined
/// claims sit next to these at the same JSON level via `#[serde(flatten)]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisteredClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    #[serde(rename = "iss", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Subject (sub) - identifies the principal that is the subject of the JWT
    #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Audience (aud) - a bare string for one recipient, an array for several
    #[serde(
        rename = "aud",
        default,
        with = "audience",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub audience: Vec<String>,

    /// Expiration Time (exp)
    #[serde(rename = "exp", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NumericDate>,

    /// Not Before (nbf)
    #[serde(rename = "nbf", skip_serializing_if = "Option::is_none")]
    pub not_before: Option<NumericDate>,

    /// Issued At (iat)
    #[serde(rename = "iat", skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<NumericDate>,

    /// JWT ID (jti)
    #[serde(rename = "jti", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Claims for RegisteredClaims {
    fn registered(&self) -> &RegisteredClaims {
        self
    }
}

mod audience {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        One(String),
        Many(Vec<String>),
    }

    pub fn serialize<S: Serializer>(audience: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        match audience {
            [single] => serializer.serialize_str(single),
            many => many.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        Ok(match Option::<Wire>::deserialize(deserializer)? {
            Some(Wire::One(single)) => vec![single],
            Some(Wire::Many(many)) => many,
            None => Vec::new(),
        })
    }
}

/// What a verifier requires of a token's identity claims
///
/// An empty `subject` accepts any non-empty subject. An empty `issuer` or an
/// empty `audience` list accepts nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpectedClaims {
    pub issuer: String,
    pub subject: String,
    pub audience: Vec<String>,
}

impl ExpectedClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact issuer
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Require an exact subject
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Accept a token addressed to `audience`; repeatable
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience.push(audience.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct EmailClaims {
        #[serde(flatten)]
        registered: RegisteredClaims,
        email: String,
    }

    impl Claims for EmailClaims {
        fn registered(&self) -> &RegisteredClaims {
            &self.registered
        }
    }

    #[test]
    fn test_empty_claims_serialize_to_empty_object() {
        let json = serde_json::to_string(&RegisteredClaims::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_single_audience_is_a_string() {
        let claims = RegisteredClaims {
            audience: vec!["client-app".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"aud":"client-app"}"#
        );
    }

    #[test]
    fn test_multiple_audiences_are_an_array() {
        let claims = RegisteredClaims {
            audience: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"aud":["a","b"]}"#
        );
    }

    #[test]
    fn test_audience_decodes_either_shape() {
        let one: RegisteredClaims = serde_json::from_str(r#"{"aud":"a"}"#).unwrap();
        assert_eq!(one.audience(), ["a".to_string()]);

        let many: RegisteredClaims = serde_json::from_str(r#"{"aud":["a","b"]}"#).unwrap();
        assert_eq!(many.audience(), ["a".to_string(), "b".to_string()]);

        let null: RegisteredClaims = serde_json::from_str(r#"{"aud":null}"#).unwrap();
        assert!(null.audience().is_empty());

        let number = serde_json::from_str::<RegisteredClaims>(r#"{"aud":42}"#);
        assert!(number.is_err());
    }

    #[test]
    fn test_registered_field_order() {
        let claims = RegisteredClaims {
            issuer: Some("accounts.example.com".to_string()),
            subject: Some("user-42".to_string()),
            audience: vec!["client-app".to_string()],
            expires_at: NumericDate::from_timestamp(4_102_444_800),
            not_before: NumericDate::from_timestamp(1_700_000_000),
            issued_at: NumericDate::from_timestamp(1_700_000_000),
            id: Some("abc".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&claims).unwrap(),
            r#"{"iss":"accounts.example.com","sub":"user-42","aud":"client-app","exp":4102444800,"nbf":1700000000,"iat":1700000000,"jti":"abc"}"#
        );
    }

    #[test]
    fn test_extension_claims_compose() {
        let json = r#"{"iss":"issuer","aud":["a","b"],"exp":1700000000.5,"email":"user@example.com"}"#;
        let claims: EmailClaims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.issuer(), Some("issuer"));
        assert_eq!(claims.audience().len(), 2);
        assert_eq!(
            claims.expiration_time().map(|d| d.timestamp()),
            Some(1_700_000_000)
        );
        assert_eq!(claims.subject(), None);
        assert_eq!(claims.id(), None);

        let encoded = serde_json::to_string(&claims).unwrap();
        assert_eq!(
            encoded,
            r#"{"iss":"issuer","aud":["a","b"],"exp":1700000000,"email":"user@example.com"}"#
        );
    }

    #[test]
    fn test_expected_claims_builder() {
        let expected = ExpectedClaims::new()
            .issuer("issuer")
            .subject("subject")
            .audience("a")
            .audience("b");
        assert_eq!(expected.issuer, "issuer");
        assert_eq!(expected.subject, "subject");
        assert_eq!(expected.audience, vec!["a", "b"]);
    }
}
