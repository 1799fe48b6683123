//! Orders and the two request payloads of the shipment and tracking services.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::address::AddressWithType;
use super::check::{self, patterns};
use super::codes::Product;
use super::error::ValidationError;
use super::parcel::Parcel;
use super::printing::PrintOptions;
use super::services::ProductAndServiceData;

pub const MAX_LENGTH_MPS_ID: usize = 25;
pub const MAX_LENGTH_C_USER: usize = 10;
pub const MAX_LENGTH_MPS_CUSTOMER_REFERENCE_NUMBER1: usize = 50;
pub const MAX_LENGTH_MPS_CUSTOMER_REFERENCE_NUMBER: usize = 35;
pub const MAX_LENGTH_IDENTIFICATION_NUMBER: usize = 999;
pub const MAX_MPS_VOLUME: u32 = 999_999_999;
pub const MAX_MPS_WEIGHT: u32 = 99_999_999;

pub const MAX_PARCELS: usize = 100;
pub const MAX_ORDERS: usize = 30;

/// Shipment-level data shared by all parcels of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralShipmentData {
    mps_id: Option<String>,
    #[serde(rename = "cUser")]
    c_user: Option<String>,
    #[serde(rename = "mpsCustomerReferenceNumber1")]
    mps_customer_reference_number1: Option<String>,
    #[serde(rename = "mpsCustomerReferenceNumber2")]
    mps_customer_reference_number2: Option<String>,
    #[serde(rename = "mpsCustomerReferenceNumber3")]
    mps_customer_reference_number3: Option<String>,
    #[serde(rename = "mpsCustomerReferenceNumber4")]
    mps_customer_reference_number4: Option<String>,
    identification_number: Option<String>,
    sending_depot: Option<String>,
    product: Option<Product>,
    mps_complete_delivery: bool,
    mps_complete_delivery_label: bool,
    mps_volume: Option<u32>,
    mps_weight: Option<u32>,
    mps_expected_sending_date: Option<String>,
    mps_expected_sending_time: Option<String>,
    sender: Option<AddressWithType>,
    recipient: Option<AddressWithType>,
    return_address: Option<AddressWithType>,
}

impl GeneralShipmentData {
    pub fn builder() -> GeneralShipmentDataBuilder {
        GeneralShipmentDataBuilder::default()
    }

    pub fn mps_id(&self) -> Option<&str> {
        self.mps_id.as_deref()
    }

    pub fn c_user(&self) -> Option<&str> {
        self.c_user.as_deref()
    }

    pub fn mps_customer_reference_number1(&self) -> Option<&str> {
        self.mps_customer_reference_number1.as_deref()
    }

    pub fn mps_customer_reference_number2(&self) -> Option<&str> {
        self.mps_customer_reference_number2.as_deref()
    }

    pub fn mps_customer_reference_number3(&self) -> Option<&str> {
        self.mps_customer_reference_number3.as_deref()
    }

    pub fn mps_customer_reference_number4(&self) -> Option<&str> {
        self.mps_customer_reference_number4.as_deref()
    }

    pub fn identification_number(&self) -> Option<&str> {
        self.identification_number.as_deref()
    }

    pub fn sending_depot(&self) -> Option<&str> {
        self.sending_depot.as_deref()
    }

    pub fn product(&self) -> Option<Product> {
        self.product
    }

    pub fn mps_complete_delivery(&self) -> bool {
        self.mps_complete_delivery
    }

    pub fn mps_complete_delivery_label(&self) -> bool {
        self.mps_complete_delivery_label
    }

    pub fn mps_volume(&self) -> Option<u32> {
        self.mps_volume
    }

    pub fn mps_weight(&self) -> Option<u32> {
        self.mps_weight
    }

    pub fn mps_expected_sending_date(&self) -> Option<&str> {
        self.mps_expected_sending_date.as_deref()
    }

    pub fn mps_expected_sending_time(&self) -> Option<&str> {
        self.mps_expected_sending_time.as_deref()
    }

    pub fn sender(&self) -> Option<&AddressWithType> {
        self.sender.as_ref()
    }

    pub fn recipient(&self) -> Option<&AddressWithType> {
        self.recipient.as_ref()
    }

    pub fn return_address(&self) -> Option<&AddressWithType> {
        self.return_address.as_ref()
    }
}

/// Builder for [`GeneralShipmentData`].
#[derive(Debug, Clone, Default)]
pub struct GeneralShipmentDataBuilder {
    inner: GeneralShipmentData,
}

impl GeneralShipmentDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mps_id(&mut self, mps_id: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.mps_id = Some(check::max_chars("mpsId", mps_id.into(), MAX_LENGTH_MPS_ID)?);
        Ok(self)
    }

    pub fn c_user(&mut self, c_user: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.c_user = Some(check::max_chars("cUser", c_user.into(), MAX_LENGTH_C_USER)?);
        Ok(self)
    }

    pub fn mps_customer_reference_number1(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.mps_customer_reference_number1 = Some(check::max_chars(
            "mpsCustomerReferenceNumber1",
            reference.into(),
            MAX_LENGTH_MPS_CUSTOMER_REFERENCE_NUMBER1,
        )?);
        Ok(self)
    }

    pub fn mps_customer_reference_number2(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.mps_customer_reference_number2 = Some(check::max_chars(
            "mpsCustomerReferenceNumber2",
            reference.into(),
            MAX_LENGTH_MPS_CUSTOMER_REFERENCE_NUMBER,
        )?);
        Ok(self)
    }

    pub fn mps_customer_reference_number3(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.mps_customer_reference_number3 = Some(check::max_chars(
            "mpsCustomerReferenceNumber3",
            reference.into(),
            MAX_LENGTH_MPS_CUSTOMER_REFERENCE_NUMBER,
        )?);
        Ok(self)
    }

    pub fn mps_customer_reference_number4(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.mps_customer_reference_number4 = Some(check::max_chars(
            "mpsCustomerReferenceNumber4",
            reference.into(),
            MAX_LENGTH_MPS_CUSTOMER_REFERENCE_NUMBER,
        )?);
        Ok(self)
    }

    pub fn identification_number(
        &mut self,
        number: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.identification_number = Some(check::max_chars(
            "identificationNumber",
            number.into(),
            MAX_LENGTH_IDENTIFICATION_NUMBER,
        )?);
        Ok(self)
    }

    /// Four-character depot code, e.g. `"0163"`.
    pub fn sending_depot(&mut self, depot: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.sending_depot = Some(check::matches(
            "sendingDepot",
            depot.into(),
            &patterns::SENDING_DEPOT,
        )?);
        Ok(self)
    }

    pub fn product(&mut self, product: Product) -> &mut Self {
        self.inner.product = Some(product);
        self
    }

    pub fn product_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.product = Some(code.parse()?);
        Ok(self)
    }

    pub fn product_dpd_classic(&mut self) -> &mut Self {
        self.product(Product::Classic)
    }

    pub fn product_dpd_express_12(&mut self) -> &mut Self {
        self.product(Product::Express12)
    }

    pub fn product_parcel_letter(&mut self) -> &mut Self {
        self.product(Product::ParcelLetter)
    }

    pub fn mps_complete_delivery(&mut self, complete: bool) -> &mut Self {
        self.inner.mps_complete_delivery = complete;
        self
    }

    pub fn mps_complete_delivery_label(&mut self, label: bool) -> &mut Self {
        self.inner.mps_complete_delivery_label = label;
        self
    }

    pub fn mps_volume(&mut self, volume: u32) -> Result<&mut Self, ValidationError> {
        self.inner.mps_volume = Some(check::at_most("mpsVolume", volume, MAX_MPS_VOLUME)?);
        Ok(self)
    }

    pub fn mps_weight(&mut self, weight: u32) -> Result<&mut Self, ValidationError> {
        self.inner.mps_weight = Some(check::at_most("mpsWeight", weight, MAX_MPS_WEIGHT)?);
        Ok(self)
    }

    /// Expected sending date as `YYYYMMDD`.
    pub fn mps_expected_sending_date(
        &mut self,
        date: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.mps_expected_sending_date = Some(check::matches(
            "mpsExpectedSendingDate",
            date.into(),
            &patterns::SENDING_DATE,
        )?);
        Ok(self)
    }

    pub fn mps_expected_sending_date_on(
        &mut self,
        date: NaiveDate,
    ) -> Result<&mut Self, ValidationError> {
        self.mps_expected_sending_date(date.format("%Y%m%d").to_string())
    }

    /// Expected sending time as `HHMMSS` (or `HMMSS`).
    pub fn mps_expected_sending_time(
        &mut self,
        time: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.mps_expected_sending_time = Some(check::matches(
            "mpsExpectedSendingTime",
            time.into(),
            &patterns::SENDING_TIME,
        )?);
        Ok(self)
    }

    pub fn mps_expected_sending_time_at(
        &mut self,
        time: NaiveTime,
    ) -> Result<&mut Self, ValidationError> {
        self.mps_expected_sending_time(time.format("%H%M%S").to_string())
    }

    pub fn sender(&mut self, sender: AddressWithType) -> &mut Self {
        self.inner.sender = Some(sender);
        self
    }

    pub fn recipient(&mut self, recipient: AddressWithType) -> &mut Self {
        self.inner.recipient = Some(recipient);
        self
    }

    pub fn return_address(&mut self, address: AddressWithType) -> &mut Self {
        self.inner.return_address = Some(address);
        self
    }

    pub fn build(&self) -> GeneralShipmentData {
        self.inner.clone()
    }
}

/// One order: shipment data, its parcels and the booked services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentServiceData {
    general_shipment_data: Option<GeneralShipmentData>,
    parcels: Vec<Parcel>,
    product_and_service_data: Option<ProductAndServiceData>,
}

impl ShipmentServiceData {
    pub fn builder() -> ShipmentServiceDataBuilder {
        ShipmentServiceDataBuilder::default()
    }

    pub fn general_shipment_data(&self) -> Option<&GeneralShipmentData> {
        self.general_shipment_data.as_ref()
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn product_and_service_data(&self) -> Option<&ProductAndServiceData> {
        self.product_and_service_data.as_ref()
    }
}

/// Builder for [`ShipmentServiceData`].
#[derive(Debug, Clone, Default)]
pub struct ShipmentServiceDataBuilder {
    inner: ShipmentServiceData,
}

impl ShipmentServiceDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn general_shipment_data(&mut self, data: GeneralShipmentData) -> &mut Self {
        self.inner.general_shipment_data = Some(data);
        self
    }

    pub fn parcels(&mut self, parcels: Vec<Parcel>) -> Result<&mut Self, ValidationError> {
        self.inner.parcels = check::capped("parcels", parcels, MAX_PARCELS)?;
        Ok(self)
    }

    pub fn add_parcel(&mut self, parcel: Parcel) -> Result<&mut Self, ValidationError> {
        check::push_capped("parcels", &mut self.inner.parcels, parcel, MAX_PARCELS)?;
        Ok(self)
    }

    pub fn product_and_service_data(&mut self, data: ProductAndServiceData) -> &mut Self {
        self.inner.product_and_service_data = Some(data);
        self
    }

    pub fn build(&self) -> ShipmentServiceData {
        self.inner.clone()
    }
}

/// Request payload of `storeOrders`: print settings plus up to 30 orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOrders {
    print_options: Option<PrintOptions>,
    #[serde(rename = "order")]
    orders: Vec<ShipmentServiceData>,
}

impl StoreOrders {
    pub fn builder() -> StoreOrdersBuilder {
        StoreOrdersBuilder::default()
    }

    pub fn print_options(&self) -> Option<&PrintOptions> {
        self.print_options.as_ref()
    }

    pub fn orders(&self) -> &[ShipmentServiceData] {
        &self.orders
    }
}

/// Builder for [`StoreOrders`].
#[derive(Debug, Clone, Default)]
pub struct StoreOrdersBuilder {
    inner: StoreOrders,
}

impl StoreOrdersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_options(&mut self, options: PrintOptions) -> &mut Self {
        self.inner.print_options = Some(options);
        self
    }

    pub fn orders(&mut self, orders: Vec<ShipmentServiceData>) -> Result<&mut Self, ValidationError> {
        self.inner.orders = check::capped("order", orders, MAX_ORDERS)?;
        Ok(self)
    }

    pub fn add_order(&mut self, order: ShipmentServiceData) -> Result<&mut Self, ValidationError> {
        check::push_capped("order", &mut self.inner.orders, order, MAX_ORDERS)?;
        Ok(self)
    }

    pub fn build(&self) -> StoreOrders {
        self.inner.clone()
    }
}

/// Request payload of `getTrackingData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTrackingData {
    parcel_label_number: String,
}

impl GetTrackingData {
    /// ```
    /// use paket::core::GetTrackingData;
    ///
    /// assert!(GetTrackingData::new("01234567890123").is_ok());
    /// assert!(GetTrackingData::new("123").is_err());
    /// ```
    pub fn new(parcel_label_number: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            parcel_label_number: check::matches(
                "parcelLabelNumber",
                parcel_label_number.into(),
                &patterns::TRACKING_LABEL_NUMBER,
            )?,
        })
    }

    pub fn parcel_label_number(&self) -> &str {
        &self.parcel_label_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Constraint;

    #[test]
    fn sending_depot_format() {
        let mut b = GeneralShipmentData::builder();
        assert!(b.sending_depot("0163").is_ok());
        assert!(b.sending_depot("016").is_err());
        assert!(b.sending_depot("01AB").is_err());
        assert_eq!(b.build().sending_depot(), Some("0163"));
    }

    #[test]
    fn sending_date_and_time_helpers() {
        let mut b = GeneralShipmentData::builder();
        b.mps_expected_sending_date_on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap()
            .mps_expected_sending_time_at(NaiveTime::from_hms_opt(9, 5, 0).unwrap())
            .unwrap();
        let data = b.build();
        assert_eq!(data.mps_expected_sending_date(), Some("20261019"));
        assert_eq!(data.mps_expected_sending_time(), Some("090500"));
        assert!(b.mps_expected_sending_time("90500").is_ok());
        assert!(b.mps_expected_sending_time("250000").is_err());
    }

    #[test]
    fn product_shortcuts() {
        let data = GeneralShipmentData::builder().product_dpd_classic().build();
        assert_eq!(data.product(), Some(Product::Classic));
        let mut b = GeneralShipmentData::builder();
        assert!(b.product_code("E12").is_ok());
        assert!(b.product_code("XX").is_err());
        assert_eq!(b.build().product(), Some(Product::Express12));
    }

    #[test]
    fn order_cap() {
        let order = ShipmentServiceData::builder().build();
        let mut b = StoreOrders::builder();
        for _ in 0..MAX_ORDERS {
            b.add_order(order.clone()).unwrap();
        }
        let err = b.add_order(order.clone()).unwrap_err();
        assert_eq!(err.field, "order");
        assert_eq!(err.constraint, Constraint::Cardinality(30));
        assert!(b.orders(vec![order; MAX_ORDERS + 1]).is_err());
        assert_eq!(b.build().orders().len(), MAX_ORDERS);
    }

    #[test]
    fn parcel_cap() {
        let parcel = Parcel::builder().build();
        let mut b = ShipmentServiceData::builder();
        b.parcels(vec![parcel.clone(); MAX_PARCELS]).unwrap();
        assert!(b.add_parcel(parcel).is_err());
    }

    #[test]
    fn tracking_label_is_exactly_14_chars() {
        assert!(GetTrackingData::new("0".repeat(13)).is_err());
        assert!(GetTrackingData::new("0".repeat(15)).is_err());
        let request = GetTrackingData::new("09981122330100").unwrap();
        assert_eq!(request.parcel_label_number(), "09981122330100");
    }
}
