//! Parameter values paired with the strategy that encodes them.

use serde_json::{Map, Value};

use crate::encoding::{JsonEncoding, ParameterEncoding, UrlEncoding};

/// Parameter names mapped to arbitrary JSON values.
pub type ParameterMap = Map<String, Value>;

/// An encoding strategy together with the values it will encode.
///
/// Values are accepted as-is. Dropping null entries or any other clean-up is
/// up to the endpoint that builds the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    encoding: ParameterEncoding,
    values: ParameterMap,
}

impl Parameters {
    pub fn new(encoding: impl Into<ParameterEncoding>, values: ParameterMap) -> Self {
        Self {
            encoding: encoding.into(),
            values,
        }
    }

    pub fn encoding(&self) -> ParameterEncoding {
        self.encoding
    }

    pub fn values(&self) -> &ParameterMap {
        &self.values
    }

    pub fn into_parts(self) -> (ParameterEncoding, ParameterMap) {
        (self.encoding, self.values)
    }
}

/// Pairs an encoding strategy with a parameter map.
///
/// ```
/// use route_sugar::{Associate, JsonEncoding, ParameterEncoding};
/// use serde_json::json;
///
/// let values = json!({"username": "devxoul"}).as_object().cloned().unwrap();
/// let params = JsonEncoding::default().with(values);
/// assert_eq!(params.encoding(), ParameterEncoding::Json(JsonEncoding::default()));
/// assert_eq!(params.values()["username"], "devxoul");
/// ```
pub trait Associate: Into<ParameterEncoding> + Sized {
    fn with(self, values: ParameterMap) -> Parameters {
        Parameters::new(self, values)
    }
}

impl Associate for ParameterEncoding {}
impl Associate for UrlEncoding {}
impl Associate for JsonEncoding {}
