//! Label output settings.

use rust_decimal::Decimal;
use serde::Serialize;

use super::codes::{ConnectionType, OutputFormatType, PaperFormat, StartPosition};
use super::error::ValidationError;

/// How the service renders the labels of a `storeOrders` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOptions {
    print_option: Vec<PrintOption>,
    split_by_parcel: Option<bool>,
}

impl PrintOptions {
    pub fn builder() -> PrintOptionsBuilder {
        PrintOptionsBuilder::default()
    }

    pub fn print_option(&self) -> &[PrintOption] {
        &self.print_option
    }

    /// Return one label document per parcel instead of one for the call.
    pub fn split_by_parcel(&self) -> Option<bool> {
        self.split_by_parcel
    }
}

/// Builder for [`PrintOptions`].
#[derive(Debug, Clone, Default)]
pub struct PrintOptionsBuilder {
    inner: PrintOptions,
}

impl PrintOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_options(&mut self, options: Vec<PrintOption>) -> &mut Self {
        self.inner.print_option = options;
        self
    }

    pub fn add_print_option(&mut self, option: PrintOption) -> &mut Self {
        self.inner.print_option.push(option);
        self
    }

    pub fn split_by_parcel(&mut self, split: bool) -> &mut Self {
        self.inner.split_by_parcel = Some(split);
        self
    }

    pub fn build(&self) -> PrintOptions {
        self.inner.clone()
    }
}

/// One output format with paper size and optional printer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOption {
    output_format: Option<OutputFormatType>,
    paper_format: Option<PaperFormat>,
    printer: Option<Printer>,
    start_position: Option<StartPosition>,
}

impl PrintOption {
    pub fn builder() -> PrintOptionBuilder {
        PrintOptionBuilder::default()
    }

    pub fn output_format(&self) -> Option<OutputFormatType> {
        self.output_format
    }

    pub fn paper_format(&self) -> Option<PaperFormat> {
        self.paper_format
    }

    pub fn printer(&self) -> Option<&Printer> {
        self.printer.as_ref()
    }

    /// Position of the first label on an A4 sheet.
    pub fn start_position(&self) -> Option<StartPosition> {
        self.start_position
    }
}

/// Builder for [`PrintOption`].
#[derive(Debug, Clone, Default)]
pub struct PrintOptionBuilder {
    inner: PrintOption,
}

impl PrintOptionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_format(&mut self, format: OutputFormatType) -> &mut Self {
        self.inner.output_format = Some(format);
        self
    }

    pub fn output_format_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.output_format = Some(code.parse()?);
        Ok(self)
    }

    pub fn paper_format(&mut self, format: PaperFormat) -> &mut Self {
        self.inner.paper_format = Some(format);
        self
    }

    pub fn paper_format_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.paper_format = Some(code.parse()?);
        Ok(self)
    }

    pub fn printer(&mut self, printer: Printer) -> &mut Self {
        self.inner.printer = Some(printer);
        self
    }

    pub fn start_position(&mut self, position: StartPosition) -> &mut Self {
        self.inner.start_position = Some(position);
        self
    }

    pub fn start_position_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.start_position = Some(code.parse()?);
        Ok(self)
    }

    pub fn build(&self) -> PrintOption {
        self.inner.clone()
    }
}

/// Label printer profile for direct thermal output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Printer {
    manufacturer: Option<String>,
    model: Option<String>,
    revision: Option<String>,
    offset_x: Option<Decimal>,
    offset_y: Option<Decimal>,
    connection_type: Option<ConnectionType>,
    #[serde(rename = "barcodeCapable2D")]
    barcode_capable_2d: Option<bool>,
}

impl Printer {
    pub fn builder() -> PrinterBuilder {
        PrinterBuilder::default()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Horizontal print offset in millimetres.
    pub fn offset_x(&self) -> Option<Decimal> {
        self.offset_x
    }

    /// Vertical print offset in millimetres.
    pub fn offset_y(&self) -> Option<Decimal> {
        self.offset_y
    }

    pub fn connection_type(&self) -> Option<ConnectionType> {
        self.connection_type
    }

    pub fn barcode_capable_2d(&self) -> Option<bool> {
        self.barcode_capable_2d
    }
}

/// Builder for [`Printer`].
#[derive(Debug, Clone, Default)]
pub struct PrinterBuilder {
    inner: Printer,
}

impl PrinterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manufacturer(&mut self, manufacturer: impl Into<String>) -> &mut Self {
        self.inner.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn model(&mut self, model: impl Into<String>) -> &mut Self {
        self.inner.model = Some(model.into());
        self
    }

    pub fn revision(&mut self, revision: impl Into<String>) -> &mut Self {
        self.inner.revision = Some(revision.into());
        self
    }

    pub fn offset_x(&mut self, offset: Decimal) -> &mut Self {
        self.inner.offset_x = Some(offset);
        self
    }

    pub fn offset_y(&mut self, offset: Decimal) -> &mut Self {
        self.inner.offset_y = Some(offset);
        self
    }

    pub fn connection_type(&mut self, connection: ConnectionType) -> &mut Self {
        self.inner.connection_type = Some(connection);
        self
    }

    pub fn connection_type_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.connection_type = Some(code.parse()?);
        Ok(self)
    }

    pub fn barcode_capable_2d(&mut self, capable: bool) -> &mut Self {
        self.inner.barcode_capable_2d = Some(capable);
        self
    }

    pub fn build(&self) -> Printer {
        self.inner.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn start_position_codes() {
        let mut b = PrintOption::builder();
        b.start_position_code("UPPER_RIGHT").unwrap();
        assert_eq!(b.build().start_position(), Some(StartPosition::UpperRight));
        assert!(b.start_position_code("MIDDLE").is_err());
        assert_eq!(b.build().start_position(), Some(StartPosition::UpperRight));
    }

    #[test]
    fn print_options_are_uncapped() {
        let option = PrintOption::builder()
            .output_format(OutputFormatType::Zpl)
            .paper_format(PaperFormat::A6)
            .build();
        let mut b = PrintOptions::builder();
        for _ in 0..50 {
            b.add_print_option(option.clone());
        }
        assert_eq!(b.build().print_option().len(), 50);
    }

    #[test]
    fn printer_profile() {
        let printer = Printer::builder()
            .manufacturer("Zebra")
            .model("GK420d")
            .offset_x(dec!(1.5))
            .offset_y(dec!(-0.5))
            .connection_type(ConnectionType::Serial)
            .barcode_capable_2d(true)
            .build();
        assert_eq!(printer.offset_y(), Some(dec!(-0.5)));
        assert_eq!(printer.barcode_capable_2d(), Some(true));
        assert!(printer.revision().is_none());
    }
}
