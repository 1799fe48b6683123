//! Customs data for shipments leaving the customs union.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use super::address::{Address, AddressWithBusinessUnit};
use super::check::{self, patterns};
use super::codes::{CustomsPaper, CustomsTerms, Linehaul};
use super::error::ValidationError;

pub const MAX_CUSTOMS_AMOUNT: u64 = 999_999_999_999_999;
pub const MAX_LENGTH_CUSTOMS_INVOICE: usize = 20;
pub const MAX_CUSTOMS_INVOICE_DATE: u32 = 99_999_999;
pub const MAX_LENGTH_CUSTOMS_ORDER: usize = 25;
pub const MAX_LENGTH_SHIP_MRN: usize = 20;
pub const MAX_INVOICE_POSITION: u32 = 999_999;
pub const MAX_LENGTH_COMMENT: usize = 70;
pub const MAX_NUMBER_OF_ARTICLE: u32 = 99;
pub const MAX_LENGTH_COUNTRY_REGISTRATION_NUMBER: usize = 15;
pub const MAX_LENGTH_CONSIGNEE_VAT_NUMBER: usize = 20;
pub const MAX_ADDITIONAL_INVOICE_LINES: usize = 99;

pub const MAX_CUSTOMS_INVOICE_POSITION: u32 = 999_999;
pub const MAX_QUANTITY_ITEMS: u32 = 9_999;
pub const MAX_LENGTH_CUSTOMS_CONTENT: usize = 200;
pub const MAX_CUSTOMS_AMOUNT_LINE: u64 = 999_999_999_999_999;
pub const MAX_CUSTOMS_ORIGIN_LINE: u32 = 999;
pub const MAX_CUSTOMS_WEIGHT: u32 = 99_999_999;
pub const MAX_LENGTH_PRODUCT_FABRIC_COMPOSITION: usize = 200;
pub const MAX_LENGTH_PRODUCT_CODE: usize = 255;
pub const MAX_LENGTH_PRODUCT_SHORT_DESCRIPTION: usize = 40;

/// Customs papers travel as one string of concatenated codes, e.g. `"AG"`.
pub fn pack_customs_papers(papers: &[CustomsPaper]) -> String {
    papers.iter().map(CustomsPaper::code).collect()
}

fn serialize_customs_papers<S: Serializer>(
    papers: &[CustomsPaper],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&pack_customs_papers(papers))
}

/// Date as the `YYYYMMDD` number the customs fields expect.
pub(crate) fn date_number(date: NaiveDate) -> u32 {
    // years past 9999 exceed every date ceiling and are rejected there
    date.year().unsigned_abs() * 10_000 + date.month() * 100 + date.day()
}

/// Customs declaration of an international shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct International {
    parcel_type: Option<bool>,
    customs_amount: Option<u64>,
    customs_currency: Option<String>,
    customs_amount_export: Option<u64>,
    customs_currency_export: Option<String>,
    customs_terms: Option<CustomsTerms>,
    #[serde(serialize_with = "serialize_customs_papers")]
    customs_paper: Vec<CustomsPaper>,
    customs_enclosure: Option<bool>,
    customs_invoice: Option<String>,
    customs_invoice_date: Option<u32>,
    customs_origin: Option<String>,
    customs_order: Option<String>,
    linehaul: Option<Linehaul>,
    ship_mrn: Option<String>,
    collective_customs_clearance: Option<bool>,
    invoice_position: Option<u32>,
    comment1: Option<String>,
    comment2: Option<String>,
    number_of_article: Option<u32>,
    country_registration_number: Option<String>,
    commercial_invoice_consignee_vat_number: Option<String>,
    commercial_invoice_consignee: Option<AddressWithBusinessUnit>,
    commercial_invoice_consignor_vat_number: Option<String>,
    commercial_invoice_consignor: Option<Address>,
    additional_invoice_lines: Vec<AdditionalInvoiceLine>,
}

impl International {
    pub fn builder() -> InternationalBuilder {
        InternationalBuilder::default()
    }

    /// `true` for documents, `false` for goods.
    pub fn parcel_type(&self) -> Option<bool> {
        self.parcel_type
    }

    /// Goods value in the currency's minor unit.
    pub fn customs_amount(&self) -> Option<u64> {
        self.customs_amount
    }

    pub fn customs_currency(&self) -> Option<&str> {
        self.customs_currency.as_deref()
    }

    pub fn customs_amount_export(&self) -> Option<u64> {
        self.customs_amount_export
    }

    pub fn customs_currency_export(&self) -> Option<&str> {
        self.customs_currency_export.as_deref()
    }

    pub fn customs_terms(&self) -> Option<CustomsTerms> {
        self.customs_terms
    }

    pub fn customs_paper(&self) -> &[CustomsPaper] {
        &self.customs_paper
    }

    pub fn customs_enclosure(&self) -> Option<bool> {
        self.customs_enclosure
    }

    pub fn customs_invoice(&self) -> Option<&str> {
        self.customs_invoice.as_deref()
    }

    pub fn customs_invoice_date(&self) -> Option<u32> {
        self.customs_invoice_date
    }

    pub fn customs_origin(&self) -> Option<&str> {
        self.customs_origin.as_deref()
    }

    pub fn customs_order(&self) -> Option<&str> {
        self.customs_order.as_deref()
    }

    pub fn linehaul(&self) -> Option<Linehaul> {
        self.linehaul
    }

    /// Movement reference number of the export declaration.
    pub fn ship_mrn(&self) -> Option<&str> {
        self.ship_mrn.as_deref()
    }

    pub fn collective_customs_clearance(&self) -> Option<bool> {
        self.collective_customs_clearance
    }

    pub fn invoice_position(&self) -> Option<u32> {
        self.invoice_position
    }

    pub fn comment1(&self) -> Option<&str> {
        self.comment1.as_deref()
    }

    pub fn comment2(&self) -> Option<&str> {
        self.comment2.as_deref()
    }

    pub fn number_of_article(&self) -> Option<u32> {
        self.number_of_article
    }

    pub fn country_registration_number(&self) -> Option<&str> {
        self.country_registration_number.as_deref()
    }

    pub fn commercial_invoice_consignee_vat_number(&self) -> Option<&str> {
        self.commercial_invoice_consignee_vat_number.as_deref()
    }

    pub fn commercial_invoice_consignee(&self) -> Option<&AddressWithBusinessUnit> {
        self.commercial_invoice_consignee.as_ref()
    }

    pub fn commercial_invoice_consignor_vat_number(&self) -> Option<&str> {
        self.commercial_invoice_consignor_vat_number.as_deref()
    }

    pub fn commercial_invoice_consignor(&self) -> Option<&Address> {
        self.commercial_invoice_consignor.as_ref()
    }

    pub fn additional_invoice_lines(&self) -> &[AdditionalInvoiceLine] {
        &self.additional_invoice_lines
    }
}

/// Builder for [`International`].
#[derive(Debug, Clone, Default)]
pub struct InternationalBuilder {
    inner: International,
}

impl InternationalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parcel_type(&mut self, documents: bool) -> &mut Self {
        self.inner.parcel_type = Some(documents);
        self
    }

    pub fn customs_amount(&mut self, amount: u64) -> Result<&mut Self, ValidationError> {
        self.inner.customs_amount = Some(check::at_most(
            "customsAmount",
            amount,
            MAX_CUSTOMS_AMOUNT,
        )?);
        Ok(self)
    }

    pub fn customs_currency(
        &mut self,
        currency: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customs_currency = Some(check::matches(
            "customsCurrency",
            currency.into(),
            &patterns::CURRENCY,
        )?);
        Ok(self)
    }

    pub fn customs_amount_export(&mut self, amount: u64) -> Result<&mut Self, ValidationError> {
        self.inner.customs_amount_export = Some(check::at_most(
            "customsAmountExport",
            amount,
            MAX_CUSTOMS_AMOUNT,
        )?);
        Ok(self)
    }

    pub fn customs_currency_export(
        &mut self,
        currency: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customs_currency_export = Some(check::matches(
            "customsCurrencyExport",
            currency.into(),
            &patterns::CURRENCY,
        )?);
        Ok(self)
    }

    pub fn customs_terms(&mut self, terms: CustomsTerms) -> &mut Self {
        self.inner.customs_terms = Some(terms);
        self
    }

    pub fn customs_terms_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.customs_terms = Some(code.parse()?);
        Ok(self)
    }

    /// Replace the customs papers from their packed form, e.g. `"AG"`.
    ///
    /// Every character must be a known paper code. An empty string clears
    /// the list.
    pub fn customs_paper(&mut self, packed: &str) -> Result<&mut Self, ValidationError> {
        let papers = packed
            .chars()
            .map(|c| c.to_string().parse::<CustomsPaper>())
            .collect::<Result<Vec<_>, _>>()?;
        self.inner.customs_paper = papers;
        Ok(self)
    }

    pub fn customs_papers(&mut self, papers: Vec<CustomsPaper>) -> &mut Self {
        self.inner.customs_paper = papers;
        self
    }

    pub fn add_customs_paper(&mut self, paper: CustomsPaper) -> &mut Self {
        self.inner.customs_paper.push(paper);
        self
    }

    pub fn customs_enclosure(&mut self, enclosure: bool) -> &mut Self {
        self.inner.customs_enclosure = Some(enclosure);
        self
    }

    pub fn customs_invoice(
        &mut self,
        invoice: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customs_invoice = Some(check::max_chars(
            "customsInvoice",
            invoice.into(),
            MAX_LENGTH_CUSTOMS_INVOICE,
        )?);
        Ok(self)
    }

    /// Invoice date as a `YYYYMMDD` number.
    pub fn customs_invoice_date(&mut self, date: u32) -> Result<&mut Self, ValidationError> {
        self.inner.customs_invoice_date = Some(check::at_most(
            "customsInvoiceDate",
            date,
            MAX_CUSTOMS_INVOICE_DATE,
        )?);
        Ok(self)
    }

    pub fn customs_invoice_date_on(&mut self, date: NaiveDate) -> Result<&mut Self, ValidationError> {
        self.customs_invoice_date(date_number(date))
    }

    pub fn customs_origin(&mut self, origin: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.customs_origin = Some(check::matches(
            "customsOrigin",
            origin.into(),
            &patterns::CUSTOMS_ORIGIN,
        )?);
        Ok(self)
    }

    pub fn customs_order(&mut self, order: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.customs_order = Some(check::max_chars(
            "customsOrder",
            order.into(),
            MAX_LENGTH_CUSTOMS_ORDER,
        )?);
        Ok(self)
    }

    pub fn linehaul(&mut self, linehaul: Linehaul) -> &mut Self {
        self.inner.linehaul = Some(linehaul);
        self
    }

    pub fn linehaul_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.linehaul = Some(code.parse()?);
        Ok(self)
    }

    pub fn ship_mrn(&mut self, mrn: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.ship_mrn = Some(check::max_chars("shipMrn", mrn.into(), MAX_LENGTH_SHIP_MRN)?);
        Ok(self)
    }

    pub fn collective_customs_clearance(&mut self, collective: bool) -> &mut Self {
        self.inner.collective_customs_clearance = Some(collective);
        self
    }

    pub fn invoice_position(&mut self, position: u32) -> Result<&mut Self, ValidationError> {
        self.inner.invoice_position = Some(check::at_most(
            "invoicePosition",
            position,
            MAX_INVOICE_POSITION,
        )?);
        Ok(self)
    }

    pub fn comment1(&mut self, comment: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.comment1 = Some(check::max_chars("comment1", comment.into(), MAX_LENGTH_COMMENT)?);
        Ok(self)
    }

    pub fn comment2(&mut self, comment: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.comment2 = Some(check::max_chars("comment2", comment.into(), MAX_LENGTH_COMMENT)?);
        Ok(self)
    }

    pub fn number_of_article(&mut self, count: u32) -> Result<&mut Self, ValidationError> {
        self.inner.number_of_article = Some(check::at_most(
            "numberOfArticle",
            count,
            MAX_NUMBER_OF_ARTICLE,
        )?);
        Ok(self)
    }

    pub fn country_registration_number(
        &mut self,
        number: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.country_registration_number = Some(check::max_chars(
            "countryRegistrationNumber",
            number.into(),
            MAX_LENGTH_COUNTRY_REGISTRATION_NUMBER,
        )?);
        Ok(self)
    }

    pub fn commercial_invoice_consignee_vat_number(
        &mut self,
        vat_number: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.commercial_invoice_consignee_vat_number = Some(check::max_chars(
            "commercialInvoiceConsigneeVatNumber",
            vat_number.into(),
            MAX_LENGTH_CONSIGNEE_VAT_NUMBER,
        )?);
        Ok(self)
    }

    pub fn commercial_invoice_consignee(&mut self, consignee: AddressWithBusinessUnit) -> &mut Self {
        self.inner.commercial_invoice_consignee = Some(consignee);
        self
    }

    pub fn commercial_invoice_consignor_vat_number(
        &mut self,
        vat_number: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.commercial_invoice_consignor_vat_number = Some(check::matches(
            "commercialInvoiceConsignorVatNumber",
            vat_number.into(),
            &patterns::VAT_NUMBER,
        )?);
        Ok(self)
    }

    pub fn commercial_invoice_consignor(&mut self, consignor: Address) -> &mut Self {
        self.inner.commercial_invoice_consignor = Some(consignor);
        self
    }

    pub fn additional_invoice_lines(
        &mut self,
        lines: Vec<AdditionalInvoiceLine>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.additional_invoice_lines =
            check::capped("additionalInvoiceLines", lines, MAX_ADDITIONAL_INVOICE_LINES)?;
        Ok(self)
    }

    pub fn add_additional_invoice_line(
        &mut self,
        line: AdditionalInvoiceLine,
    ) -> Result<&mut Self, ValidationError> {
        check::push_capped(
            "additionalInvoiceLines",
            &mut self.inner.additional_invoice_lines,
            line,
            MAX_ADDITIONAL_INVOICE_LINES,
        )?;
        Ok(self)
    }

    pub fn build(&self) -> International {
        self.inner.clone()
    }
}

/// One position of the commercial invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInvoiceLine {
    customs_invoice_position: Option<u32>,
    quantity_items: Option<u32>,
    customs_content: Option<String>,
    customs_tarif: Option<String>,
    customs_amount_line: Option<u64>,
    customs_origin: Option<u32>,
    customs_net_weight: Option<u32>,
    customs_gross_weight: Option<u32>,
    product_fabric_composition: Option<String>,
    product_code: Option<String>,
    product_short_description: Option<String>,
}

impl AdditionalInvoiceLine {
    pub fn builder() -> AdditionalInvoiceLineBuilder {
        AdditionalInvoiceLineBuilder::default()
    }

    pub fn customs_invoice_position(&self) -> Option<u32> {
        self.customs_invoice_position
    }

    pub fn quantity_items(&self) -> Option<u32> {
        self.quantity_items
    }

    pub fn customs_content(&self) -> Option<&str> {
        self.customs_content.as_deref()
    }

    /// Harmonized System tariff number.
    pub fn customs_tarif(&self) -> Option<&str> {
        self.customs_tarif.as_deref()
    }

    pub fn customs_amount_line(&self) -> Option<u64> {
        self.customs_amount_line
    }

    /// Numeric ISO 3166 code of the country of origin.
    pub fn customs_origin(&self) -> Option<u32> {
        self.customs_origin
    }

    pub fn customs_net_weight(&self) -> Option<u32> {
        self.customs_net_weight
    }

    pub fn customs_gross_weight(&self) -> Option<u32> {
        self.customs_gross_weight
    }

    pub fn product_fabric_composition(&self) -> Option<&str> {
        self.product_fabric_composition.as_deref()
    }

    pub fn product_code(&self) -> Option<&str> {
        self.product_code.as_deref()
    }

    pub fn product_short_description(&self) -> Option<&str> {
        self.product_short_description.as_deref()
    }
}

/// Builder for [`AdditionalInvoiceLine`].
#[derive(Debug, Clone, Default)]
pub struct AdditionalInvoiceLineBuilder {
    inner: AdditionalInvoiceLine,
}

impl AdditionalInvoiceLineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customs_invoice_position(&mut self, position: u32) -> Result<&mut Self, ValidationError> {
        self.inner.customs_invoice_position = Some(check::at_most(
            "customsInvoicePosition",
            position,
            MAX_CUSTOMS_INVOICE_POSITION,
        )?);
        Ok(self)
    }

    pub fn quantity_items(&mut self, quantity: u32) -> Result<&mut Self, ValidationError> {
        self.inner.quantity_items = Some(check::at_most(
            "quantityItems",
            quantity,
            MAX_QUANTITY_ITEMS,
        )?);
        Ok(self)
    }

    pub fn customs_content(
        &mut self,
        content: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customs_content = Some(check::max_chars(
            "customsContent",
            content.into(),
            MAX_LENGTH_CUSTOMS_CONTENT,
        )?);
        Ok(self)
    }

    pub fn customs_tarif(&mut self, tarif: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.customs_tarif = Some(check::matches(
            "customsTarif",
            tarif.into(),
            &patterns::CUSTOMS_TARIF,
        )?);
        Ok(self)
    }

    pub fn customs_amount_line(&mut self, amount: u64) -> Result<&mut Self, ValidationError> {
        self.inner.customs_amount_line = Some(check::at_most(
            "customsAmountLine",
            amount,
            MAX_CUSTOMS_AMOUNT_LINE,
        )?);
        Ok(self)
    }

    pub fn customs_origin(&mut self, origin: u32) -> Result<&mut Self, ValidationError> {
        self.inner.customs_origin = Some(check::at_most(
            "customsOrigin",
            origin,
            MAX_CUSTOMS_ORIGIN_LINE,
        )?);
        Ok(self)
    }

    pub fn customs_net_weight(&mut self, weight: u32) -> Result<&mut Self, ValidationError> {
        self.inner.customs_net_weight = Some(check::at_most(
            "customsNetWeight",
            weight,
            MAX_CUSTOMS_WEIGHT,
        )?);
        Ok(self)
    }

    pub fn customs_gross_weight(&mut self, weight: u32) -> Result<&mut Self, ValidationError> {
        self.inner.customs_gross_weight = Some(check::at_most(
            "customsGrossWeight",
            weight,
            MAX_CUSTOMS_WEIGHT,
        )?);
        Ok(self)
    }

    pub fn product_fabric_composition(
        &mut self,
        composition: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.product_fabric_composition = Some(check::max_chars(
            "productFabricComposition",
            composition.into(),
            MAX_LENGTH_PRODUCT_FABRIC_COMPOSITION,
        )?);
        Ok(self)
    }

    pub fn product_code(&mut self, code: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.product_code = Some(check::max_chars(
            "productCode",
            code.into(),
            MAX_LENGTH_PRODUCT_CODE,
        )?);
        Ok(self)
    }

    pub fn product_short_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.product_short_description = Some(check::max_chars(
            "productShortDescription",
            description.into(),
            MAX_LENGTH_PRODUCT_SHORT_DESCRIPTION,
        )?);
        Ok(self)
    }

    pub fn build(&self) -> AdditionalInvoiceLine {
        self.inner.clone()
    }
}
