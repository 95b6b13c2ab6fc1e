use crate::envelope::ApiResponse;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::marker::PhantomData;

pub const IS_OK_KEY: &str = "isOk";
pub const MSSG_KEY: &str = "mssg";
pub const DATA_KEY: &str = "data";
pub const EXPIRED_KEY: &str = "expired";

/// Caller-supplied predicate over the raw `data` value of an envelope.
///
/// Implemented for every `Fn(&Value) -> bool`, so closures can be passed
/// directly. Implementations must not panic.
pub trait PayloadValidator {
    fn validate(&self, data: &Value) -> bool;
}

impl<F> PayloadValidator for F
where
    F: Fn(&Value) -> bool,
{
    fn validate(&self, data: &Value) -> bool {
        self(data)
    }
}

/// Accepts a payload iff it deserializes into `T`.
pub struct Decodes<T>(PhantomData<fn() -> T>);

impl<T> Decodes<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Decodes<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PayloadValidator for Decodes<T>
where
    T: DeserializeOwned,
{
    fn validate(&self, data: &Value) -> bool {
        T::deserialize(data).is_ok()
    }
}

/// Outcome of narrowing an untyped value to an envelope.
///
/// Shape-only narrowing yields [`Narrowed::Shape`]; narrowing with a payload
/// validator yields [`Narrowed::Validated`]. Every failure, whether the shape
/// was wrong or the payload was rejected, is [`Narrowed::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Narrowed<'a> {
    Invalid,
    Shape(ResponseView<'a>),
    Validated(ValidatedResponse<'a>),
}

impl<'a> Narrowed<'a> {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// The envelope view, for both shape-only and validated results.
    pub fn view(self) -> Option<ResponseView<'a>> {
        match self {
            Self::Invalid => None,
            Self::Shape(view) => Some(view),
            Self::Validated(validated) => Some(validated.view()),
        }
    }

    pub fn validated(self) -> Option<ValidatedResponse<'a>> {
        match self {
            Self::Validated(validated) => Some(validated),
            _ => None,
        }
    }
}

/// Borrowed view of a value that passed the shape check.
///
/// Only key presence was checked, so typed accessors return `None` when the
/// stored value has another JSON type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseView<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ResponseView<'a> {
    pub fn is_ok(&self) -> Option<bool> {
        self.fields.get(IS_OK_KEY).and_then(Value::as_bool)
    }

    pub fn mssg(&self) -> Option<&'a str> {
        self.fields.get(MSSG_KEY).and_then(Value::as_str)
    }

    /// The payload, treating an explicit `null` the same as an absent key.
    pub fn data(&self) -> Option<&'a Value> {
        self.fields.get(DATA_KEY).filter(|data| !data.is_null())
    }

    pub fn expired(&self) -> Option<bool> {
        self.fields.get(EXPIRED_KEY).and_then(Value::as_bool)
    }

    pub fn fields(&self) -> &'a Map<String, Value> {
        self.fields
    }

    pub fn decode<T>(&self) -> Result<ApiResponse<T>, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }
}

/// A view whose payload is present, non-null and accepted by the validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedResponse<'a> {
    view: ResponseView<'a>,
    data: &'a Value,
}

impl<'a> ValidatedResponse<'a> {
    pub fn view(&self) -> ResponseView<'a> {
        self.view
    }

    pub fn is_ok(&self) -> Option<bool> {
        self.view.is_ok()
    }

    pub fn mssg(&self) -> Option<&'a str> {
        self.view.mssg()
    }

    pub fn data(&self) -> &'a Value {
        self.data
    }

    pub fn expired(&self) -> Option<bool> {
        self.view.expired()
    }

    pub fn decode_data<T>(&self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        T::deserialize(self.data)
    }

    pub fn decode<T>(&self) -> Result<ApiResponse<T>, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        self.view.decode()
    }
}

fn envelope_fields(value: &Value) -> Option<&Map<String, Value>> {
    let fields = value.as_object()?;
    (fields.contains_key(IS_OK_KEY) && fields.contains_key(MSSG_KEY)).then_some(fields)
}

/// Shape check: `value` is an object holding both `isOk` and `mssg`.
///
/// `data` is not inspected.
pub fn is_api_response(value: &Value) -> bool {
    envelope_fields(value).is_some()
}

/// Shape check followed by a payload check.
///
/// The validator only runs when the shape check passed and `data` is present
/// and not `null`.
pub fn is_api_response_with<V>(value: &Value, validator: V) -> bool
where
    V: PayloadValidator,
{
    narrow_with(value, validator).is_valid()
}

pub fn narrow(value: &Value) -> Narrowed<'_> {
    match envelope_fields(value) {
        Some(fields) => Narrowed::Shape(ResponseView { fields }),
        None => Narrowed::Invalid,
    }
}

pub fn narrow_with<V>(value: &Value, validator: V) -> Narrowed<'_>
where
    V: PayloadValidator,
{
    let Some(fields) = envelope_fields(value) else {
        return Narrowed::Invalid;
    };

    match fields.get(DATA_KEY) {
        Some(data) if !data.is_null() && validator.validate(data) => {
            Narrowed::Validated(ValidatedResponse {
                view: ResponseView { fields },
                data,
            })
        }
        _ => Narrowed::Invalid,
    }
}
