//! Annotation value - the form-side state of one annotation field
//!
//! An [`AnnotationValue`] is created for each annotation type when a form is
//! opened. It keeps the value in the shape the form edits (separate date and
//! time inputs, a checkbox per option, ...) and converts to and from the
//! [`Annotation`] record the server understands.
//!
//! Select values travel in `selectedValues` only; every other type travels in
//! `stringValue` / `numberValue`. [`AnnotationValue::annotation_value`] and
//! [`AnnotationValue::selected_values`] each produce one half and
//! [`AnnotationValue::annotation`] merges them.

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};

use crate::common::datetime::{
    check_date_range, format_display, parse_annotation_timestamp, parse_date_input,
    parse_time_input, to_wire_timestamp,
};
use crate::entities::{AnnotationTypeDescriptor, AnnotationValueType, SelectionMode};
use crate::error::DomainError;
use crate::AnnotationTypeId;

use super::annotation::{Annotation, AnnotationScalar, NumberValue, SelectedValue};

/// One checkbox of a multi-select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub name: String,
    pub checked: bool,
}

impl SelectOption {
    fn unchecked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
        }
    }
}

/// Value representation, fixed by the annotation type at construction
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationState {
    Text(Option<String>),
    /// Kept as entered until serialization
    Number(Option<NumberValue>),
    /// Edited through two inputs, combined only when serialized
    DateTime {
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
    },
    SelectSingle(Option<String>),
    /// Options in annotation type order
    SelectMulti(Vec<SelectOption>),
}

impl AnnotationState {
    fn initial(descriptor: &AnnotationTypeDescriptor) -> Result<Self, DomainError> {
        match descriptor.value_type {
            AnnotationValueType::Text => Ok(Self::Text(None)),
            AnnotationValueType::Number => Ok(Self::Number(None)),
            AnnotationValueType::DateTime => Ok(Self::DateTime {
                date: None,
                time: None,
            }),
            AnnotationValueType::Select if descriptor.is_multi_select() => Ok(Self::SelectMulti(
                descriptor
                    .options
                    .iter()
                    .map(SelectOption::unchecked)
                    .collect(),
            )),
            AnnotationValueType::Select => Ok(Self::SelectSingle(None)),
            AnnotationValueType::Unknown => Err(DomainError::invalid_value_type(format!(
                "invalid value type for annotation type '{}'",
                descriptor.name
            ))),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Number(_) => "Number",
            Self::DateTime { .. } => "DateTime",
            Self::SelectSingle(_) => "single Select",
            Self::SelectMulti(_) => "multiple Select",
        }
    }
}

/// Form state for one annotation type
#[derive(Debug, Clone)]
pub struct AnnotationValue {
    annotation_type: Arc<AnnotationTypeDescriptor>,
    required: bool,
    display_value: Option<String>,
    state: AnnotationState,
    utc_offset: FixedOffset,
}

impl AnnotationValue {
    /// Creates an empty value for `annotation_type`.
    ///
    /// `default_required` is used only when the annotation type does not
    /// carry its own `required` flag.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Configuration`] if neither source provides `required`
    /// - [`DomainError::InvalidValueType`] for an unknown value type
    pub fn create(
        annotation_type: impl Into<Arc<AnnotationTypeDescriptor>>,
        default_required: Option<bool>,
    ) -> Result<Self, DomainError> {
        let annotation_type = annotation_type.into();
        let required = annotation_type
            .required
            .or(default_required)
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "required not assigned for annotation type '{}'",
                    annotation_type.name
                ))
            })?;
        let state = AnnotationState::initial(&annotation_type)?;

        Ok(Self {
            annotation_type,
            required,
            display_value: None,
            state,
            utc_offset: Utc.fix(),
        })
    }

    /// Sets the wall-clock offset the date and time inputs are expressed in.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Pre-fills both date-time inputs with `now`. No-op for other types.
    pub fn seed_date_time(&mut self, now: NaiveDateTime) {
        if let AnnotationState::DateTime { date, time } = &mut self.state {
            *date = Some(now.date());
            *time = Some(now.time());
        }
    }

    pub fn annotation_type(&self) -> &AnnotationTypeDescriptor {
        &self.annotation_type
    }

    pub fn annotation_type_id(&self) -> &AnnotationTypeId {
        &self.annotation_type.id
    }

    pub fn label(&self) -> &str {
        &self.annotation_type.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Read-only text for the value loaded by [`Self::set_value`]
    pub fn display_value(&self) -> Option<&str> {
        self.display_value.as_deref()
    }

    pub fn state(&self) -> &AnnotationState {
        &self.state
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Loads the value of an annotation received from the server.
    ///
    /// Each call fully replaces the current value.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Parse`] if a date-time `stringValue` is malformed
    /// - [`DomainError::InvalidState`] if a Select annotation type has a
    ///   `maxValueCount` that is neither 1 nor greater than 1
    pub fn set_value(&mut self, annotation: &Annotation) -> Result<(), DomainError> {
        let display = match &mut self.state {
            AnnotationState::Text(value) => {
                value.clone_from(&annotation.string_value);
                value.clone()
            }
            AnnotationState::Number(value) => {
                value.clone_from(&annotation.number_value);
                value.as_ref().map(ToString::to_string)
            }
            AnnotationState::DateTime { date, time } => {
                let source = annotation.string_value.as_deref().ok_or_else(|| {
                    DomainError::parse(format!(
                        "date-time annotation '{}' has no stringValue",
                        self.annotation_type.name
                    ))
                })?;
                let parsed = parse_annotation_timestamp(source, self.utc_offset)?;
                *date = Some(parsed.date());
                *time = Some(parsed.time());
                Some(format_display(&parsed))
            }
            AnnotationState::SelectSingle(value) => {
                if self.annotation_type.selection_mode()? != SelectionMode::Single {
                    return Err(DomainError::invalid_state(format!(
                        "annotation type '{}' is not single select",
                        self.annotation_type.name
                    )));
                }
                *value = annotation
                    .selected_values
                    .first()
                    .and_then(|sv| sv.value.clone());
                value.clone()
            }
            AnnotationState::SelectMulti(options) => {
                self.annotation_type.selection_mode()?;
                *options = annotation
                    .selected_values
                    .iter()
                    .filter_map(|sv| sv.value.clone())
                    .map(|name| SelectOption {
                        name,
                        checked: true,
                    })
                    .collect();
                let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
                (!names.is_empty()).then(|| names.join(", "))
            }
        };
        self.display_value = display;
        Ok(())
    }

    /// Selected options as wire records. Empty for non-Select types.
    ///
    /// A single-select field (`maxValueCount == 1`) always yields exactly one
    /// record, even when nothing has been chosen. A Select type with any
    /// other `maxValueCount` yields nothing.
    pub fn selected_values(&self) -> Vec<SelectedValue> {
        let id = &self.annotation_type.id;
        match &self.state {
            AnnotationState::Text(_)
            | AnnotationState::Number(_)
            | AnnotationState::DateTime { .. } => Vec::new(),
            AnnotationState::SelectSingle(value) => {
                if !matches!(self.annotation_type.selection_mode(), Ok(SelectionMode::Single)) {
                    return Vec::new();
                }
                vec![SelectedValue {
                    annotation_type_id: id.clone(),
                    value: value.clone(),
                }]
            }
            AnnotationState::SelectMulti(options) => options
                .iter()
                .filter(|o| o.checked)
                .map(|o| SelectedValue::new(id.clone(), o.name.clone()))
                .collect(),
        }
    }

    /// Scalar wire fields. `None` for Select types, whose data travels
    /// through [`Self::selected_values`].
    pub fn annotation_value(&self) -> Option<AnnotationScalar> {
        match &self.state {
            AnnotationState::Text(value) => Some(AnnotationScalar::StringValue(value.clone())),
            AnnotationState::Number(value) => Some(AnnotationScalar::NumberValue(
                value.as_ref().map(ToString::to_string),
            )),
            AnnotationState::DateTime { date, time } => {
                let timestamp = match (date, time) {
                    (Some(date), Some(time)) => to_wire_timestamp(*date, *time, self.utc_offset),
                    _ => None,
                };
                Some(AnnotationScalar::StringValue(timestamp))
            }
            AnnotationState::SelectSingle(_) | AnnotationState::SelectMulti(_) => None,
        }
    }

    /// The annotation record for the server's REST API
    pub fn annotation(&self) -> Annotation {
        let mut annotation = Annotation::new(self.annotation_type.id.clone());
        annotation.selected_values = self.selected_values();
        if let Some(scalar) = self.annotation_value() {
            annotation.merge_scalar(scalar);
        }
        annotation
    }

    /// Whether the field has been filled in
    pub fn has_value(&self) -> bool {
        match &self.state {
            AnnotationState::Text(value) | AnnotationState::SelectSingle(value) => {
                value.as_deref().is_some_and(|v| !v.is_empty())
            }
            AnnotationState::Number(value) => value.is_some(),
            AnnotationState::DateTime { date, time } => date.is_some() && time.is_some(),
            AnnotationState::SelectMulti(_) => self.some_selected(),
        }
    }

    /// True when at least one multi-select option is checked
    pub fn some_selected(&self) -> bool {
        match &self.state {
            AnnotationState::SelectMulti(options) => options.iter().any(|o| o.checked),
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Input handlers
    // -------------------------------------------------------------------------

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        match &mut self.state {
            AnnotationState::Text(value) => {
                *value = Some(text.into());
                Ok(())
            }
            other => Err(mismatch(&self.annotation_type, other, "Text")),
        }
    }

    pub fn set_number(&mut self, number: impl Into<NumberValue>) -> Result<(), DomainError> {
        match &mut self.state {
            AnnotationState::Number(value) => {
                *value = Some(number.into());
                Ok(())
            }
            other => Err(mismatch(&self.annotation_type, other, "Number")),
        }
    }

    /// Sets the date part; years outside `1..=9999` are a [`DomainError::Parse`].
    pub fn set_date(&mut self, new_date: NaiveDate) -> Result<(), DomainError> {
        match &mut self.state {
            AnnotationState::DateTime { date, .. } => {
                *date = Some(check_date_range(new_date)?);
                Ok(())
            }
            other => Err(mismatch(&self.annotation_type, other, "DateTime")),
        }
    }

    pub fn set_time(&mut self, new_time: NaiveTime) -> Result<(), DomainError> {
        match &mut self.state {
            AnnotationState::DateTime { time, .. } => {
                *time = Some(new_time);
                Ok(())
            }
            other => Err(mismatch(&self.annotation_type, other, "DateTime")),
        }
    }

    /// Date input value in `YYYY-MM-DD` form
    pub fn set_date_input(&mut self, input: &str) -> Result<(), DomainError> {
        let date = parse_date_input(input)?;
        self.set_date(date)
    }

    /// Time picker value in `YYYY-MM-DD h:mm:ss a` form; only the time of day is kept
    pub fn set_time_input(&mut self, input: &str) -> Result<(), DomainError> {
        let dt = parse_time_input(input)?;
        self.set_time(dt.time())
    }

    /// Chooses the option of a single-select field
    pub fn select(&mut self, option: impl Into<String>) -> Result<(), DomainError> {
        match &mut self.state {
            AnnotationState::SelectSingle(value) => {
                *value = Some(option.into());
                Ok(())
            }
            other => Err(mismatch(&self.annotation_type, other, "single Select")),
        }
    }

    /// Checks or unchecks an option of a multi-select field
    pub fn set_checked(&mut self, option: &str, checked: bool) -> Result<(), DomainError> {
        match &mut self.state {
            AnnotationState::SelectMulti(options) => {
                let entry = options
                    .iter_mut()
                    .find(|o| o.name == option)
                    .ok_or_else(|| {
                        DomainError::validation(format!(
                            "'{}' is not an option of annotation type '{}'",
                            option, self.annotation_type.name
                        ))
                    })?;
                entry.checked = checked;
                Ok(())
            }
            other => Err(DomainError::validation(format!(
                "annotation type '{}' holds {} values, options cannot be checked",
                self.annotation_type.name,
                other.kind()
            ))),
        }
    }
}

fn mismatch(
    annotation_type: &AnnotationTypeDescriptor,
    state: &AnnotationState,
    requested: &str,
) -> DomainError {
    DomainError::invalid_value_type(format!(
        "annotation type '{}' holds {} values, not {}",
        annotation_type.name,
        state.kind(),
        requested
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn text_type() -> AnnotationTypeDescriptor {
        AnnotationTypeDescriptor::new("at-text", "Comment", AnnotationValueType::Text)
            .with_required(false)
    }

    fn number_type() -> AnnotationTypeDescriptor {
        AnnotationTypeDescriptor::new("at-num", "Weight", AnnotationValueType::Number)
            .with_required(true)
    }

    fn date_time_type() -> AnnotationTypeDescriptor {
        AnnotationTypeDescriptor::new("at-dt", "Collected At", AnnotationValueType::DateTime)
            .with_required(true)
    }

    fn single_select_type() -> AnnotationTypeDescriptor {
        AnnotationTypeDescriptor::select("at-sel", "Sample Type", 1, ["Blood", "Urine"])
            .with_required(true)
    }

    fn multi_select_type() -> AnnotationTypeDescriptor {
        AnnotationTypeDescriptor::select("at-multi", "Tags", 3, ["A", "B", "C"])
            .with_required(false)
    }

    // -- create ---------------------------------------------------------------

    #[test]
    fn create_uses_descriptor_required_over_default() {
        let value = AnnotationValue::create(text_type(), Some(true)).unwrap();
        assert!(!value.is_required());
    }

    #[test]
    fn create_falls_back_to_default_required() {
        let mut descriptor = text_type();
        descriptor.required = None;
        let value = AnnotationValue::create(descriptor, Some(true)).unwrap();
        assert!(value.is_required());
    }

    #[test]
    fn create_without_any_required_fails() {
        let mut descriptor = text_type();
        descriptor.required = None;
        let err = AnnotationValue::create(descriptor, None).unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn create_rejects_unknown_value_type() {
        let descriptor =
            AnnotationTypeDescriptor::new("at-x", "Flag", AnnotationValueType::Unknown)
                .with_required(true);
        let err = AnnotationValue::create(descriptor, None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValueType(_)));
    }

    #[test]
    fn create_seeds_multi_select_options_unchecked() {
        let value = AnnotationValue::create(multi_select_type(), None).unwrap();
        let AnnotationState::SelectMulti(options) = value.state() else {
            panic!("expected multi select state");
        };
        let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(options.iter().all(|o| !o.checked));
        assert!(!value.some_selected());
    }

    #[test]
    fn create_zero_max_value_count_uses_single_representation() {
        let descriptor = AnnotationTypeDescriptor::select("at-bad", "Broken", 0, ["X"])
            .with_required(true);
        let value = AnnotationValue::create(descriptor, None).unwrap();
        assert_eq!(value.state(), &AnnotationState::SelectSingle(None));
    }

    #[test]
    fn select_without_valid_max_value_count_sends_no_selected_values() {
        let zero = AnnotationTypeDescriptor::select("at-bad", "Broken", 0, ["X"])
            .with_required(true);
        let value = AnnotationValue::create(zero, None).unwrap();
        assert!(value.selected_values().is_empty());
        assert!(value.annotation().selected_values.is_empty());

        let unset = AnnotationTypeDescriptor::new("at-bad", "Broken", AnnotationValueType::Select)
            .with_required(true);
        let value = AnnotationValue::create(unset, None).unwrap();
        assert!(value.selected_values().is_empty());
        assert_eq!(
            serde_json::to_string(&value.annotation()).unwrap(),
            r#"{"annotationTypeId":"at-bad","selectedValues":[]}"#
        );
    }

    #[test]
    fn accessors_pass_through_descriptor() {
        let value = AnnotationValue::create(number_type(), None).unwrap();
        assert_eq!(value.label(), "Weight");
        assert_eq!(value.annotation_type_id().as_str(), "at-num");
    }

    // -- fresh annotation -----------------------------------------------------

    #[test]
    fn fresh_text_annotation_has_empty_string_value() {
        let value = AnnotationValue::create(text_type(), None).unwrap();
        assert_eq!(
            value.annotation_value(),
            Some(AnnotationScalar::StringValue(None))
        );
        let annotation = value.annotation();
        assert_eq!(annotation.annotation_type_id.as_str(), "at-text");
        assert!(annotation.string_value.is_none());
        assert!(annotation.selected_values.is_empty());
    }

    #[test]
    fn fresh_number_annotation_has_empty_number_value() {
        let value = AnnotationValue::create(number_type(), None).unwrap();
        assert_eq!(
            value.annotation_value(),
            Some(AnnotationScalar::NumberValue(None))
        );
        let annotation = value.annotation();
        assert!(annotation.number_value.is_none());
        assert!(annotation.selected_values.is_empty());
    }

    #[test]
    fn fresh_date_time_annotation_has_empty_string_value() {
        let value = AnnotationValue::create(date_time_type(), None).unwrap();
        assert_eq!(
            value.annotation_value(),
            Some(AnnotationScalar::StringValue(None))
        );
        assert!(value.annotation().selected_values.is_empty());
        assert!(!value.has_value());
    }

    #[test]
    fn fresh_select_annotation_has_no_scalar() {
        let value = AnnotationValue::create(multi_select_type(), None).unwrap();
        assert_eq!(value.annotation_value(), None);
        let annotation = value.annotation();
        assert!(annotation.string_value.is_none());
        assert!(annotation.number_value.is_none());
        assert!(annotation.selected_values.is_empty());
    }

    // -- text / number --------------------------------------------------------

    #[test]
    fn text_round_trip() {
        let mut value = AnnotationValue::create(text_type(), None).unwrap();
        value.set_text("hello").unwrap();
        let annotation = value.annotation();
        assert_eq!(annotation.string_value.as_deref(), Some("hello"));

        let mut reloaded = AnnotationValue::create(text_type(), None).unwrap();
        reloaded.set_value(&annotation).unwrap();
        assert_eq!(reloaded.state(), &AnnotationState::Text(Some("hello".into())));
        assert_eq!(reloaded.display_value(), Some("hello"));
    }

    #[test]
    fn number_round_trip() {
        let mut value = AnnotationValue::create(number_type(), None).unwrap();
        value.set_number("12.5").unwrap();
        let annotation = value.annotation();
        assert_eq!(annotation.number_value, Some(NumberValue::from("12.5")));

        value.set_value(&annotation).unwrap();
        assert_eq!(
            value.state(),
            &AnnotationState::Number(Some(NumberValue::from("12.5")))
        );
        assert_eq!(value.display_value(), Some("12.5"));
    }

    #[test]
    fn number_entered_as_number_is_sent_as_string() {
        let mut value = AnnotationValue::create(number_type(), None).unwrap();
        value.set_number(42.0).unwrap();
        assert_eq!(
            value.annotation_value(),
            Some(AnnotationScalar::NumberValue(Some("42".to_string())))
        );
        let json = serde_json::to_value(value.annotation()).unwrap();
        assert_eq!(json["numberValue"], serde_json::json!("42"));
    }

    #[test]
    fn set_value_with_server_number_keeps_it_numeric() {
        let mut value = AnnotationValue::create(number_type(), None).unwrap();
        let annotation = Annotation::new("at-num".into()).with_number_value(7.0);
        value.set_value(&annotation).unwrap();
        assert_eq!(
            value.state(),
            &AnnotationState::Number(Some(NumberValue::Number(7.0)))
        );
        assert_eq!(value.display_value(), Some("7"));
    }

    #[test]
    fn setter_for_other_type_is_rejected() {
        let mut value = AnnotationValue::create(text_type(), None).unwrap();
        let err = value.set_number(1.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValueType(_)));
        assert_eq!(value.state(), &AnnotationState::Text(None));
    }

    // -- date time ------------------------------------------------------------

    #[test]
    fn date_time_combines_date_and_time_inputs() {
        let mut value = AnnotationValue::create(date_time_type(), None).unwrap();
        value.set_date_input("2020-01-15").unwrap();
        value.set_time_input("2020-01-15 3:45:00 pm").unwrap();

        let Some(AnnotationScalar::StringValue(Some(stamp))) = value.annotation_value() else {
            panic!("expected a timestamp");
        };
        assert_eq!(stamp, "2020-01-15T15:45:00Z");
    }

    #[test]
    fn date_time_uses_time_of_day_only_from_time_input() {
        let mut value = AnnotationValue::create(date_time_type(), None).unwrap();
        value.set_date_input("2021-06-01").unwrap();
        value.set_time_input("1999-12-31 9:05:59 am").unwrap();
        assert_eq!(
            value.annotation().string_value.as_deref(),
            Some("2021-06-01T09:05:00Z")
        );
    }

    #[test]
    fn date_time_round_trip_reproduces_display() {
        let mut value = AnnotationValue::create(date_time_type(), None).unwrap();
        value.set_date_input("2020-01-15").unwrap();
        value.set_time_input("2020-01-15 3:45:00 pm").unwrap();
        let annotation = value.annotation();

        let mut reloaded = AnnotationValue::create(date_time_type(), None).unwrap();
        reloaded.set_value(&annotation).unwrap();
        assert_eq!(reloaded.display_value(), Some("2020-01-15 3:45 PM"));
        assert_eq!(reloaded.annotation(), annotation);
    }

    #[test]
    fn date_time_round_trip_with_offset() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let mut value = AnnotationValue::create(date_time_type(), None)
            .unwrap()
            .with_utc_offset(offset);
        value.set_date_input("2020-01-15").unwrap();
        value.set_time_input("2020-01-15 9:30:00 pm").unwrap();
        let annotation = value.annotation();
        assert_eq!(
            annotation.string_value.as_deref(),
            Some("2020-01-16T02:30:00Z")
        );

        let mut reloaded = AnnotationValue::create(date_time_type(), None)
            .unwrap()
            .with_utc_offset(offset);
        reloaded.set_value(&annotation).unwrap();
        assert_eq!(reloaded.display_value(), Some("2020-01-15 9:30 PM"));
    }

    #[test]
    fn set_value_parses_form_pattern() {
        let mut value = AnnotationValue::create(date_time_type(), None).unwrap();
        let annotation =
            Annotation::new("at-dt".into()).with_string_value("2019-11-02 10:15:00 am");
        value.set_value(&annotation).unwrap();

        let AnnotationState::DateTime {
            date: Some(date),
            time: Some(time),
        } = value.state()
        else {
            panic!("expected both date-time parts");
        };
        assert_eq!((date.year(), date.month(), date.day()), (2019, 11, 2));
        assert_eq!((time.hour(), time.minute()), (10, 15));
        assert_eq!(value.display_value(), Some("2019-11-02 10:15 AM"));
    }

    #[test]
    fn set_value_with_malformed_date_time_fails() {
        let mut value = AnnotationValue::create(date_time_type(), None).unwrap();
        let annotation = Annotation::new("at-dt".into()).with_string_value("15/01/2020");
        let err = value.set_value(&annotation).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn set_value_without_date_time_string_fails() {
        let mut value = AnnotationValue::create(date_time_type(), None).unwrap();
        let err = value.set_value(&Annotation::new("at-dt".into())).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn seed_date_time_prefills_both_parts() {
        let mut value = AnnotationValue::create(date_time_type(), None).unwrap();
        let now = parse_time_input("2024-03-09 4:20:11 pm").unwrap();
        value.seed_date_time(now);
        assert!(value.has_value());
        assert_eq!(
            value.annotation().string_value.as_deref(),
            Some("2024-03-09T16:20:00Z")
        );
    }

    // -- select ---------------------------------------------------------------

    #[test]
    fn single_select_yields_one_selected_value() {
        let mut value = AnnotationValue::create(single_select_type(), None).unwrap();
        value.select("Blood").unwrap();
        assert_eq!(
            value.selected_values(),
            vec![SelectedValue::new("at-sel".into(), "Blood")]
        );
        assert_eq!(value.annotation_value(), None);
    }

    #[test]
    fn single_select_unset_still_yields_one_record() {
        let value = AnnotationValue::create(single_select_type(), None).unwrap();
        let selected = value.selected_values();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, None);
    }

    #[test]
    fn single_select_set_value_takes_first() {
        let mut value = AnnotationValue::create(single_select_type(), None).unwrap();
        let annotation = Annotation::new("at-sel".into()).with_selected_values(["Urine"]);
        value.set_value(&annotation).unwrap();
        assert_eq!(
            value.state(),
            &AnnotationState::SelectSingle(Some("Urine".into()))
        );
        assert_eq!(value.display_value(), Some("Urine"));
    }

    #[test]
    fn multi_select_preserves_option_order() {
        let mut value = AnnotationValue::create(multi_select_type(), None).unwrap();
        value.set_checked("C", true).unwrap();
        value.set_checked("A", true).unwrap();

        let values: Vec<Option<String>> =
            value.selected_values().into_iter().map(|sv| sv.value).collect();
        assert_eq!(values, vec![Some("A".to_string()), Some("C".to_string())]);
        assert!(value.some_selected());
    }

    #[test]
    fn multi_select_unchecking_removes_value() {
        let mut value = AnnotationValue::create(multi_select_type(), None).unwrap();
        value.set_checked("B", true).unwrap();
        value.set_checked("B", false).unwrap();
        assert!(value.selected_values().is_empty());
        assert!(!value.has_value());
    }

    #[test]
    fn multi_select_unknown_option_is_rejected() {
        let mut value = AnnotationValue::create(multi_select_type(), None).unwrap();
        let err = value.set_checked("Z", true).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn multi_select_set_value_keeps_exactly_selected() {
        let mut value = AnnotationValue::create(multi_select_type(), None).unwrap();
        let annotation = Annotation::new("at-multi".into()).with_selected_values(["B", "C"]);
        value.set_value(&annotation).unwrap();

        assert_eq!(
            value.state(),
            &AnnotationState::SelectMulti(vec![
                SelectOption {
                    name: "B".into(),
                    checked: true
                },
                SelectOption {
                    name: "C".into(),
                    checked: true
                },
            ])
        );
        assert_eq!(value.display_value(), Some("B, C"));
        assert_eq!(value.annotation().selected_values.len(), 2);
    }

    #[test]
    fn multi_select_set_value_with_no_selection_empties_list() {
        let mut value = AnnotationValue::create(multi_select_type(), None).unwrap();
        value
            .set_value(&Annotation::new("at-multi".into()))
            .unwrap();
        assert_eq!(value.state(), &AnnotationState::SelectMulti(Vec::new()));
        assert_eq!(value.display_value(), None);
    }

    #[test]
    fn date_outside_four_digit_years_is_rejected() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let mut value = AnnotationValue::create(date_time_type(), None)
            .unwrap()
            .with_utc_offset(offset);

        let err = value.set_date_input("+262142-12-31").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        let err = value.set_date(NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));

        value.set_date_input("9999-12-31").unwrap();
        value.set_time_input("2020-01-15 11:00:00 pm").unwrap();
        assert!(value.annotation().string_value.is_some());
    }

    #[test]
    fn set_value_with_zero_max_value_count_fails() {
        let descriptor = AnnotationTypeDescriptor::select("at-bad", "Broken", 0, ["X"])
            .with_required(true);
        let mut value = AnnotationValue::create(descriptor, None).unwrap();
        let annotation = Annotation::new("at-bad".into()).with_selected_values(["X"]);
        let err = value.set_value(&annotation).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn non_select_types_have_no_selected_values() {
        for descriptor in [text_type(), number_type(), date_time_type()] {
            let value = AnnotationValue::create(descriptor, None).unwrap();
            assert!(value.selected_values().is_empty());
        }
    }

    #[test]
    fn set_value_is_idempotent() {
        let mut value = AnnotationValue::create(text_type(), None).unwrap();
        let annotation = Annotation::new("at-text".into()).with_string_value("again");
        value.set_value(&annotation).unwrap();
        value.set_value(&annotation).unwrap();
        assert_eq!(value.annotation(), annotation);
    }
}
