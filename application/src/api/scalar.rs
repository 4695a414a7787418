//! GraphQL scalar definitions.

use std::{fmt, marker::PhantomData, str::FromStr};

use juniper::{
    GraphQLType, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue, Value,
};

/// Helper type to use in `#[graphql(with = ..)]` attribute.
///
/// Represents the target type as a GraphQL string scalar by using
/// [`FromStr`]/[`Display`] impls of the validated `As` type it wraps, so
/// domain validation applies to the GraphQL input as well.
///
/// Target type must implement [`TryFrom`] and [`AsRef`] for `As` type.
///
/// [`Display`]: fmt::Display
#[derive(Debug)]
pub struct Via<As>(PhantomData<As>);

impl<As> Via<As> {
    /// Converts the target type into scalar [`Value`] by using [`Display`]
    /// impl of `As` type.
    ///
    /// [`Display`]: fmt::Display
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        As: fmt::Display,
        T: AsRef<As>,
        S: ScalarValue,
    {
        Value::from(value.as_ref().to_string())
    }

    /// Constructs the target type from scalar [`Value`] by using [`FromStr`]
    /// impl of `As` type.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the input value is not a string;
    /// - the input value cannot be parsed into `As` type;
    /// - the parsed value cannot be converted into the target type.
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        As: FromStr,
        As::Err: fmt::Display,
        T: TryFrom<As> + GraphQLType<S, TypeInfo = ()>,
        T::Error: fmt::Display,
        S: ScalarValue,
    {
        let name = T::name(&()).unwrap_or("String");
        let s = input.as_string_value().ok_or_else(|| {
            format!(
                "Cannot parse input scalar `{name}`: expected string input \
                 value, found: {input}",
            )
        })?;
        s.parse::<As>()
            .map_err(|e| {
                format!("Cannot parse input scalar `{name}` from \"{s}\": {e}")
            })?
            .try_into()
            .map_err(|e| format!("Cannot parse input scalar `{name}`: {e}"))
    }

    /// Parses the provided [`ScalarToken`] as a [`String`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be parsed as [`String`].
    pub fn parse_token<S: ScalarValue>(
        value: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}

#[cfg(test)]
mod spec {
    use juniper::{DefaultScalarValue, InputValue, Value};
    use service::domain::doctor;

    use crate::api::doctor::Name;

    use super::Via;

    type NameVia = Via<doctor::Name>;

    #[test]
    fn outputs_as_string() {
        let name = Name::from(doctor::Name::new("Dr. Jane Doe").unwrap());
        assert_eq!(
            NameVia::to_output::<_, DefaultScalarValue>(&name),
            Value::scalar("Dr. Jane Doe".to_owned()),
        );
    }

    #[test]
    fn validates_input() {
        let input =
            InputValue::<DefaultScalarValue>::scalar("Dr. Jane Doe".to_owned());
        let name: Name = NameVia::from_input(&input).unwrap();
        assert_eq!(name.to_string(), "Dr. Jane Doe");

        let padded = InputValue::<DefaultScalarValue>::scalar(
            " Dr. Jane Doe".to_owned(),
        );
        assert!(NameVia::from_input::<Name, _>(&padded).is_err());

        let number = InputValue::<DefaultScalarValue>::scalar(42);
        assert!(NameVia::from_input::<Name, _>(&number).is_err());
    }
}
