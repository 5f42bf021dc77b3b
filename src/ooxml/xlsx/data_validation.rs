//! Data validation rules.
//!
//! A [`DataValidation`] restricts what may be typed into a range of cells: a
//! list of allowed values, a numeric or date range, a text length or a
//! custom formula. It can show an input prompt when a cell is selected and an
//! error alert when invalid data is entered.
//!
//! ```
//! use sheetwright::ooxml::xlsx::{DataValidation, ErrorStyle, Workbook};
//!
//! let mut wb = Workbook::new();
//! let mut dv = DataValidation::new(true);
//! dv.set_sqref("A1:B2");
//! dv.set_drop_list(&["1", "2", "3"]);
//! dv.set_error(ErrorStyle::Warning, "Invalid", "Pick a value from the list");
//! wb.add_data_validation("Sheet1", dv).unwrap();
//! ```

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::xlsx::workbook::Workbook;

/// Longest accepted formula: 255 characters plus the surrounding quotes.
pub const DATA_VALIDATION_FORMULA_MAX_LEN: usize = 257;

/// Kind of data a validation rule allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataValidationType {
    None,
    Custom,
    Date,
    Decimal,
    List,
    TextLength,
    Time,
    Whole,
}

impl DataValidationType {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Custom => "custom",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::List => "list",
            Self::TextLength => "textLength",
            Self::Time => "time",
            Self::Whole => "whole",
        }
    }
}

/// Comparison applied between the cell value and the rule's formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataValidationOperator {
    Between,
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    NotBetween,
    NotEqual,
}

impl DataValidationOperator {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::Equal => "equal",
            Self::GreaterThan => "greaterThan",
            Self::GreaterThanOrEqual => "greaterThanOrEqual",
            Self::LessThan => "lessThan",
            Self::LessThanOrEqual => "lessThanOrEqual",
            Self::NotBetween => "notBetween",
            Self::NotEqual => "notEqual",
        }
    }
}

/// Error alert style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStyle {
    /// Reject the value
    #[default]
    Stop,
    /// Warn and let the user keep the value
    Warning,
    /// Inform only
    Information,
}

impl ErrorStyle {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Warning => "warning",
            Self::Information => "information",
        }
    }
}

impl FromStr for ErrorStyle {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stop" => Ok(Self::Stop),
            "warning" => Ok(Self::Warning),
            "information" => Ok(Self::Information),
            other => Err(OoxmlError::InvalidErrorStyle(other.to_string())),
        }
    }
}

/// A data validation rule for one or more cell ranges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataValidation {
    pub allow_blank: bool,
    pub show_drop_down: bool,
    pub show_error_message: bool,
    pub show_input_message: bool,
    pub error_style: Option<ErrorStyle>,
    pub error_title: Option<String>,
    pub error: Option<String>,
    pub prompt_title: Option<String>,
    pub prompt: Option<String>,
    pub validation_type: Option<DataValidationType>,
    pub operator: Option<DataValidationOperator>,
    /// Space separated cell ranges the rule applies to
    pub sqref: String,
    pub formula1: String,
    pub formula2: String,
}

impl DataValidation {
    /// Create a rule with input prompt and error alert disabled.
    pub fn new(allow_blank: bool) -> Self {
        Self {
            allow_blank,
            show_error_message: false,
            show_input_message: false,
            ..Default::default()
        }
    }

    /// Enable the error alert shown when invalid data is entered.
    pub fn set_error(&mut self, style: ErrorStyle, title: &str, msg: &str) {
        self.error = Some(msg.to_string());
        self.error_title = Some(title.to_string());
        self.error_style = Some(style);
        self.show_error_message = true;
    }

    /// Enable the input prompt shown when a cell of the range is selected.
    pub fn set_input(&mut self, title: &str, msg: &str) {
        self.show_input_message = true;
        self.prompt_title = Some(title.to_string());
        self.prompt = Some(msg.to_string());
    }

    /// Restrict the range to a list of values.
    ///
    /// Always succeeds; an over-long list is rejected when the rule is added
    /// to a worksheet.
    pub fn set_drop_list<S: AsRef<str>>(&mut self, keys: &[S]) {
        let mut formula = String::with_capacity(2 + keys.iter().map(|k| k.as_ref().len() + 1).sum::<usize>());
        formula.push('"');
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                formula.push(',');
            }
            formula.push_str(key.as_ref());
        }
        formula.push('"');
        self.formula1 = formula;
        self.validation_type = Some(DataValidationType::List);
    }

    /// Restrict the range to values compared against two integers.
    ///
    /// The formulas already held by the rule are checked before they are
    /// replaced, so a rule whose drop list grew too long cannot be turned
    /// into a range rule.
    pub fn set_range(
        &mut self,
        f1: i64,
        f2: i64,
        validation_type: DataValidationType,
        operator: DataValidationOperator,
    ) -> Result<()> {
        if self.formula_too_long() {
            return Err(OoxmlError::DataValidationFormulaLength);
        }
        self.formula1 = itoa::Buffer::new().format(f1).to_string();
        self.formula2 = itoa::Buffer::new().format(f2).to_string();
        self.validation_type = Some(validation_type);
        self.operator = Some(operator);
        Ok(())
    }

    /// Like [`set_range`](Self::set_range) with formula or date bounds such
    /// as `DATE(2024,1,1)` or `$C$1`.
    pub fn set_formula_range(
        &mut self,
        f1: &str,
        f2: &str,
        validation_type: DataValidationType,
        operator: DataValidationOperator,
    ) -> Result<()> {
        if self.formula_too_long() || too_long(f1) || too_long(f2) {
            return Err(OoxmlError::DataValidationFormulaLength);
        }
        self.formula1 = f1.to_string();
        self.formula2 = f2.to_string();
        self.validation_type = Some(validation_type);
        self.operator = Some(operator);
        Ok(())
    }

    /// Add a cell range; ranges accumulate separated by spaces.
    pub fn set_sqref(&mut self, sqref: &str) {
        if self.sqref.is_empty() {
            self.sqref = sqref.to_string();
        } else {
            self.sqref.push(' ');
            self.sqref.push_str(sqref);
        }
    }

    /// Whether either formula exceeds [`DATA_VALIDATION_FORMULA_MAX_LEN`].
    pub fn formula_too_long(&self) -> bool {
        too_long(&self.formula1) || too_long(&self.formula2)
    }

    /// Write the `dataValidation` element.
    pub fn write_xml(&self, xml: &mut String) -> fmt::Result {
        xml.push_str("<dataValidation");
        if let Some(validation_type) = self.validation_type {
            write!(xml, r#" type="{}""#, validation_type.keyword())?;
        }
        if let Some(style) = self.error_style {
            write!(xml, r#" errorStyle="{}""#, style.keyword())?;
        }
        if let Some(operator) = self.operator {
            write!(xml, r#" operator="{}""#, operator.keyword())?;
        }
        if self.allow_blank {
            xml.push_str(r#" allowBlank="1""#);
        }
        if self.show_drop_down {
            xml.push_str(r#" showDropDown="1""#);
        }
        if self.show_input_message {
            xml.push_str(r#" showInputMessage="1""#);
        }
        if self.show_error_message {
            xml.push_str(r#" showErrorMessage="1""#);
        }
        if let Some(ref title) = self.error_title {
            write!(xml, r#" errorTitle="{}""#, escape_xml(title))?;
        }
        if let Some(ref msg) = self.error {
            write!(xml, r#" error="{}""#, escape_xml(msg))?;
        }
        if let Some(ref title) = self.prompt_title {
            write!(xml, r#" promptTitle="{}""#, escape_xml(title))?;
        }
        if let Some(ref msg) = self.prompt {
            write!(xml, r#" prompt="{}""#, escape_xml(msg))?;
        }
        write!(xml, r#" sqref="{}">"#, escape_xml(&self.sqref))?;

        if !self.formula1.is_empty() {
            write!(xml, "<formula1>{}</formula1>", escape_xml(&self.formula1))?;
        }
        if !self.formula2.is_empty() {
            write!(xml, "<formula2>{}</formula2>", escape_xml(&self.formula2))?;
        }
        xml.push_str("</dataValidation>");
        Ok(())
    }
}

#[inline]
fn too_long(formula: &str) -> bool {
    formula.chars().count() > DATA_VALIDATION_FORMULA_MAX_LEN
}

/// The validation rules of one worksheet.
#[derive(Debug, Clone, Default)]
pub struct DataValidations {
    count: usize,
    rules: Vec<DataValidation>,
}

impl DataValidations {
    /// Append a rule. Rules are never merged or deduplicated.
    pub fn push(&mut self, rule: DataValidation) {
        self.rules.push(rule);
        self.count = self.rules.len();
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn rules(&self) -> &[DataValidation] {
        &self.rules
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Write the `dataValidations` element, nothing when there are no rules.
    pub fn write_xml(&self, xml: &mut String) -> fmt::Result {
        if self.rules.is_empty() {
            return Ok(());
        }
        write!(xml, r#"<dataValidations count="{}">"#, self.count)?;
        for rule in &self.rules {
            rule.write_xml(xml)?;
        }
        xml.push_str("</dataValidations>");
        Ok(())
    }
}

impl Workbook {
    /// Attach a data validation rule to a worksheet.
    ///
    /// Fails with [`OoxmlError::SheetNotExist`] for an unknown worksheet and
    /// with [`OoxmlError::DataValidationFormulaLength`] when a formula of the
    /// rule is too long.
    pub fn add_data_validation(&mut self, sheet: &str, rule: DataValidation) -> Result<()> {
        if rule.formula_too_long() {
            return Err(OoxmlError::DataValidationFormulaLength);
        }
        let ws = self.worksheet_mut(sheet)?;
        ws.data_validations.push(rule);
        tracing::debug!(
            sheet,
            count = ws.data_validations.count(),
            "added data validation"
        );
        Ok(())
    }

    /// The data validation rules of a worksheet.
    pub fn data_validations(&self, sheet: &str) -> Result<&[DataValidation]> {
        Ok(self.worksheet(sheet)?.data_validations.rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{Cursor, Read};

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn a1_rule() -> DataValidation {
        let mut dv = DataValidation::new(true);
        dv.set_sqref("A1");
        dv
    }

    #[test]
    fn test_new() {
        let dv = DataValidation::new(true);
        assert!(dv.allow_blank);
        assert!(!dv.show_error_message);
        assert!(!dv.show_input_message);
        assert!(dv.validation_type.is_none());
    }

    #[test]
    fn test_set_error_and_input() {
        let mut dv = DataValidation::new(false);
        dv.set_error(ErrorStyle::Information, "Title", "Message");
        dv.set_input("Hint", "Enter a number");
        assert!(dv.show_error_message);
        assert_eq!(dv.error_style.map(|s| s.keyword()), Some("information"));
        assert_eq!(dv.error_title.as_deref(), Some("Title"));
        assert_eq!(dv.error.as_deref(), Some("Message"));
        assert!(dv.show_input_message);
        assert_eq!(dv.prompt_title.as_deref(), Some("Hint"));
        assert_eq!(dv.prompt.as_deref(), Some("Enter a number"));
    }

    #[test]
    fn test_error_style_from_str() {
        assert_eq!("warning".parse::<ErrorStyle>().unwrap(), ErrorStyle::Warning);
        assert!(matches!(
            "fatal".parse::<ErrorStyle>(),
            Err(OoxmlError::InvalidErrorStyle(s)) if s == "fatal"
        ));
    }

    #[test]
    fn test_set_drop_list() {
        let mut dv = DataValidation::new(true);
        dv.set_drop_list(&["1", "2", "3"]);
        assert_eq!(dv.formula1, "\"1,2,3\"");
        assert_eq!(dv.validation_type, Some(DataValidationType::List));
    }

    #[test]
    fn test_set_range() {
        let mut dv = DataValidation::new(true);
        dv.set_range(10, 20, DataValidationType::Whole, DataValidationOperator::Between)
            .unwrap();
        assert_eq!(dv.formula1, "10");
        assert_eq!(dv.formula2, "20");
        assert_eq!(dv.validation_type.map(|t| t.keyword()), Some("whole"));
        assert_eq!(dv.operator.map(|o| o.keyword()), Some("between"));
    }

    #[test]
    fn test_set_range_checks_previous_formula() {
        let mut dv = DataValidation::new(true);
        let keys: Vec<String> = (0..100).map(|i| format!("item{i}")).collect();
        dv.set_drop_list(&keys);
        assert!(dv.formula1.len() > DATA_VALIDATION_FORMULA_MAX_LEN);

        let err = dv
            .set_range(1, 2, DataValidationType::Whole, DataValidationOperator::Between)
            .unwrap_err();
        assert!(matches!(err, OoxmlError::DataValidationFormulaLength));
        assert_eq!(err.to_string(), "data validation must be 0-255 characters");
        assert_eq!(dv.validation_type, Some(DataValidationType::List));
    }

    #[test]
    fn test_add_data_validation() {
        let mut wb = Workbook::new();
        wb.add_data_validation("Sheet1", a1_rule()).unwrap();
        wb.add_data_validation("Sheet1", a1_rule()).unwrap();

        let rules = wb.data_validations("Sheet1").unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|dv| dv.sqref == "A1"));
        assert_eq!(wb.worksheet("Sheet1").unwrap().data_validations.count(), 2);
    }

    #[test]
    fn test_add_data_validation_unknown_sheet() {
        let mut wb = Workbook::new();
        assert!(matches!(
            wb.add_data_validation("Sheet2", a1_rule()),
            Err(OoxmlError::SheetNotExist(name)) if name == "Sheet2"
        ));
        assert!(matches!(
            wb.data_validations("Sheet2"),
            Err(OoxmlError::SheetNotExist(_))
        ));
    }

    #[test]
    fn test_add_data_validation_formula_too_long() {
        let mut wb = Workbook::new();
        let mut dv = a1_rule();
        let keys: Vec<String> = (0..100).map(|i| format!("item{i}")).collect();
        dv.set_drop_list(&keys);

        assert!(matches!(
            wb.add_data_validation("Sheet1", dv),
            Err(OoxmlError::DataValidationFormulaLength)
        ));
        assert!(wb.data_validations("Sheet1").unwrap().is_empty());
    }

    #[test]
    fn test_add_data_validation_saved() {
        let mut wb = Workbook::new();
        wb.add_data_validation("Sheet1", a1_rule()).unwrap();
        let mut list = DataValidation::new(false);
        list.set_sqref("B1:B5");
        list.set_drop_list(&["Yes", "No"]);
        wb.add_data_validation("Sheet1", list).unwrap();

        let bytes = wb.write_to_buffer().unwrap();
        let xml = read_member(&bytes, "xl/worksheets/sheet1.xml");
        assert!(xml.contains(
            r#"<dataValidations count="2"><dataValidation allowBlank="1" sqref="A1"></dataValidation>"#
        ));
        assert!(xml.contains(
            r#"<dataValidation type="list" sqref="B1:B5"><formula1>&quot;Yes,No&quot;</formula1></dataValidation></dataValidations>"#
        ));
    }

    #[test]
    fn test_set_formula_range() {
        let mut dv = DataValidation::new(false);
        dv.set_formula_range(
            "DATE(2024,1,1)",
            "DATE(2024,12,31)",
            DataValidationType::Date,
            DataValidationOperator::Between,
        )
        .unwrap();
        assert_eq!(dv.formula1, "DATE(2024,1,1)");

        let long = "1".repeat(258);
        assert!(
            dv.set_formula_range(&long, "", DataValidationType::Custom, DataValidationOperator::Equal)
                .is_err()
        );
        assert_eq!(dv.formula1, "DATE(2024,1,1)");
    }

    #[test]
    fn test_set_sqref() {
        let mut dv = DataValidation::new(true);
        dv.set_sqref("A1:B2");
        dv.set_sqref("C3:D4");
        assert_eq!(dv.sqref, "A1:B2 C3:D4");
    }

    #[test]
    fn test_write_xml() {
        let mut dv = DataValidation::new(true);
        dv.set_sqref("A1:A10");
        dv.set_drop_list(&["a&b", "c"]);
        dv.set_error(ErrorStyle::Stop, "Oops", "Bad <value>");

        let mut rules = DataValidations::default();
        rules.push(dv.clone());
        rules.push(dv);
        let mut xml = String::new();
        rules.write_xml(&mut xml).unwrap();

        assert!(xml.starts_with(r#"<dataValidations count="2">"#));
        assert!(xml.contains(r#" type="list""#));
        assert!(xml.contains(r#" errorStyle="stop""#));
        assert!(xml.contains(r#" error="Bad &lt;value&gt;""#));
        assert!(xml.contains("<formula1>&quot;a&amp;b,c&quot;</formula1>"));
        assert!(!xml.contains("<formula2>"));
    }

    proptest! {
        #[test]
        fn prop_sqref_joins_with_spaces(refs in proptest::collection::vec("[A-Z]{1,2}[1-9][0-9]{0,2}", 1..6)) {
            let mut dv = DataValidation::new(false);
            for r in &refs {
                dv.set_sqref(r);
            }
            prop_assert_eq!(dv.sqref, refs.join(" "));
        }

        #[test]
        fn prop_set_range_formats_integers(f1 in any::<i64>(), f2 in any::<i64>()) {
            let mut dv = DataValidation::new(false);
            dv.set_range(f1, f2, DataValidationType::Decimal, DataValidationOperator::NotBetween).unwrap();
            prop_assert_eq!(dv.formula1, f1.to_string());
            prop_assert_eq!(dv.formula2, f2.to_string());
        }
    }
}
