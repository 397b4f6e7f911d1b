use axum::{extract::FromRequestParts, http::request::Parts};

/// Nombre del query parameter repetible del endpoint de dataset.
pub const HEADERS_PARAM: &str = "headers";

/// Extractor que junta todos los valores de `?headers=A&headers=B`.
///
/// `axum::extract::Query` no soporta keys repetidas, por eso se parsea el
/// query string a mano.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadersQuery(pub Vec<String>);

impl HeadersQuery {
    /// Parsea un query string crudo (sin el `?`).
    pub fn from_query(query: &str) -> Self {
        let headers = query
            .split('&')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(name) == HEADERS_PARAM).then(|| decode(value))
            })
            .collect();

        Self(headers)
    }

    /// Valida que cada header pueda ir en la lista `get=` separada por comas.
    pub fn validate(&self) -> Result<(), String> {
        for header in &self.0 {
            if header.trim().is_empty() {
                return Err("Header names cannot be empty".to_string());
            }
            if header.contains(',') {
                return Err(format!("Header '{}' cannot contain ','", header));
            }
            if header.chars().any(|c| c.is_control()) {
                return Err("Header names cannot contain control characters".to_string());
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Decodifica un componente `application/x-www-form-urlencoded`.
fn decode(component: &str) -> String {
    let component = component.replace('+', " ");
    urlencoding::decode(&component)
        .map(|s| s.into_owned())
        .unwrap_or(component)
}

impl<S> FromRequestParts<S> for HeadersQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .uri
            .query()
            .map(HeadersQuery::from_query)
            .unwrap_or_default())
    }
}
