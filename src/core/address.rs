use serde::Serialize;

use super::check::{self, patterns};
use super::codes::AddressType;
use super::error::ValidationError;

pub const MAX_LENGTH_NAME1: usize = 50;
pub const MAX_LENGTH_NAME2: usize = 35;
pub const MAX_LENGTH_STREET: usize = 35;
pub const MAX_LENGTH_HOUSE_NO: usize = 8;
pub const MAX_LENGTH_ZIP_CODE: usize = 9;
pub const MAX_LENGTH_CITY: usize = 50;
pub const MAX_LENGTH_CUSTOMER_NUMBER: usize = 17;
pub const MAX_LENGTH_CONTACT: usize = 35;
pub const MAX_LENGTH_PHONE: usize = 30;
pub const MAX_LENGTH_MOBILE: usize = 30;
pub const MAX_LENGTH_FAX: usize = 30;
pub const MAX_LENGTH_EMAIL: usize = 100;
pub const MAX_LENGTH_COMMENT: usize = 70;
pub const MAX_LENGTH_IACCOUNT: usize = 50;
pub const MAX_GLN: u64 = 9_999_999_999_999;
pub const MAX_BUSINESS_UNIT: u32 = 999;

/// Postal address with contact data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    name1: Option<String>,
    name2: Option<String>,
    street: Option<String>,
    house_no: Option<String>,
    state: Option<String>,
    country: Option<String>,
    zip_code: Option<String>,
    city: Option<String>,
    gln: Option<u64>,
    customer_number: Option<String>,
    contact: Option<String>,
    phone: Option<String>,
    mobile: Option<String>,
    fax: Option<String>,
    email: Option<String>,
    comment: Option<String>,
    iaccount: Option<String>,
}

impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    pub fn name1(&self) -> Option<&str> {
        self.name1.as_deref()
    }

    pub fn name2(&self) -> Option<&str> {
        self.name2.as_deref()
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn house_no(&self) -> Option<&str> {
        self.house_no.as_deref()
    }

    /// ISO 3166-2 subdivision code.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// GS1 Global Location Number.
    pub fn gln(&self) -> Option<u64> {
        self.gln
    }

    pub fn customer_number(&self) -> Option<&str> {
        self.customer_number.as_deref()
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn mobile(&self) -> Option<&str> {
        self.mobile.as_deref()
    }

    pub fn fax(&self) -> Option<&str> {
        self.fax.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Internal account of the customer at the carrier.
    pub fn iaccount(&self) -> Option<&str> {
        self.iaccount.as_deref()
    }
}

/// Builder for [`Address`].
///
/// ```
/// use paket::core::*;
///
/// let address = Address::builder()
///     .name1("ACME GmbH").unwrap()
///     .street("Friedrichstraße").unwrap()
///     .house_no("123").unwrap()
///     .zip_code("10115").unwrap()
///     .city("Berlin").unwrap()
///     .country("DE").unwrap()
///     .build();
///
/// assert_eq!(address.city(), Some("Berlin"));
/// assert_eq!(address.email(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    inner: Address,
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name1(&mut self, name1: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.name1 = Some(check::max_chars("name1", name1.into(), MAX_LENGTH_NAME1)?);
        Ok(self)
    }

    pub fn name2(&mut self, name2: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.name2 = Some(check::max_chars("name2", name2.into(), MAX_LENGTH_NAME2)?);
        Ok(self)
    }

    pub fn street(&mut self, street: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.street = Some(check::max_chars("street", street.into(), MAX_LENGTH_STREET)?);
        Ok(self)
    }

    pub fn house_no(&mut self, house_no: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.house_no = Some(check::max_chars(
            "houseNo",
            house_no.into(),
            MAX_LENGTH_HOUSE_NO,
        )?);
        Ok(self)
    }

    pub fn state(&mut self, state: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.state = Some(check::matches("state", state.into(), &patterns::STATE)?);
        Ok(self)
    }

    pub fn country(&mut self, country: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.country = Some(check::matches("country", country.into(), &patterns::COUNTRY)?);
        Ok(self)
    }

    pub fn zip_code(&mut self, zip_code: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.zip_code = Some(check::max_chars(
            "zipCode",
            zip_code.into(),
            MAX_LENGTH_ZIP_CODE,
        )?);
        Ok(self)
    }

    pub fn city(&mut self, city: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.city = Some(check::max_chars("city", city.into(), MAX_LENGTH_CITY)?);
        Ok(self)
    }

    pub fn gln(&mut self, gln: u64) -> Result<&mut Self, ValidationError> {
        self.inner.gln = Some(check::at_most("gln", gln, MAX_GLN)?);
        Ok(self)
    }

    pub fn customer_number(
        &mut self,
        customer_number: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.customer_number = Some(check::max_chars(
            "customerNumber",
            customer_number.into(),
            MAX_LENGTH_CUSTOMER_NUMBER,
        )?);
        Ok(self)
    }

    pub fn contact(&mut self, contact: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.contact = Some(check::max_chars("contact", contact.into(), MAX_LENGTH_CONTACT)?);
        Ok(self)
    }

    pub fn phone(&mut self, phone: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.phone = Some(check::max_chars("phone", phone.into(), MAX_LENGTH_PHONE)?);
        Ok(self)
    }

    pub fn mobile(&mut self, mobile: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.mobile = Some(check::max_chars("mobile", mobile.into(), MAX_LENGTH_MOBILE)?);
        Ok(self)
    }

    pub fn fax(&mut self, fax: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.fax = Some(check::max_chars("fax", fax.into(), MAX_LENGTH_FAX)?);
        Ok(self)
    }

    /// Format is checked before length, so an overlong but well-formed
    /// address reports the length limit.
    pub fn email(&mut self, email: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let email = check::matches("email", email.into(), &patterns::EMAIL)?;
        self.inner.email = Some(check::max_chars("email", email, MAX_LENGTH_EMAIL)?);
        Ok(self)
    }

    pub fn comment(&mut self, comment: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.comment = Some(check::max_chars("comment", comment.into(), MAX_LENGTH_COMMENT)?);
        Ok(self)
    }

    pub fn iaccount(&mut self, iaccount: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.iaccount = Some(check::max_chars(
            "iaccount",
            iaccount.into(),
            MAX_LENGTH_IACCOUNT,
        )?);
        Ok(self)
    }

    pub fn build(&self) -> Address {
        self.inner.clone()
    }
}

/// Address extended by the carrier's business unit number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressWithBusinessUnit {
    #[serde(flatten)]
    address: Address,
    business_unit: Option<u32>,
}

impl AddressWithBusinessUnit {
    pub fn builder(address: Address) -> AddressWithBusinessUnitBuilder {
        AddressWithBusinessUnitBuilder::new(address)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn business_unit(&self) -> Option<u32> {
        self.business_unit
    }
}

impl From<Address> for AddressWithBusinessUnit {
    fn from(address: Address) -> Self {
        Self {
            address,
            business_unit: None,
        }
    }
}

/// Builder for [`AddressWithBusinessUnit`].
#[derive(Debug, Clone)]
pub struct AddressWithBusinessUnitBuilder {
    inner: AddressWithBusinessUnit,
}

impl AddressWithBusinessUnitBuilder {
    pub fn new(address: Address) -> Self {
        Self {
            inner: AddressWithBusinessUnit::from(address),
        }
    }

    pub fn business_unit(&mut self, business_unit: u32) -> Result<&mut Self, ValidationError> {
        self.inner.business_unit = Some(check::at_most(
            "businessUnit",
            business_unit,
            MAX_BUSINESS_UNIT,
        )?);
        Ok(self)
    }

    pub fn build(&self) -> AddressWithBusinessUnit {
        self.inner.clone()
    }
}

/// Address with business unit and private/commercial classification.
/// Used for sender, recipient and return address of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressWithType {
    #[serde(flatten)]
    address: Address,
    business_unit: Option<u32>,
    address_type: Option<AddressType>,
}

impl AddressWithType {
    pub fn builder(address: Address) -> AddressWithTypeBuilder {
        AddressWithTypeBuilder::new(address)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn business_unit(&self) -> Option<u32> {
        self.business_unit
    }

    pub fn address_type(&self) -> Option<AddressType> {
        self.address_type
    }
}

impl From<Address> for AddressWithType {
    fn from(address: Address) -> Self {
        Self {
            address,
            business_unit: None,
            address_type: None,
        }
    }
}

/// Builder for [`AddressWithType`].
#[derive(Debug, Clone)]
pub struct AddressWithTypeBuilder {
    inner: AddressWithType,
}

impl AddressWithTypeBuilder {
    pub fn new(address: Address) -> Self {
        Self {
            inner: AddressWithType::from(address),
        }
    }

    pub fn business_unit(&mut self, business_unit: u32) -> Result<&mut Self, ValidationError> {
        self.inner.business_unit = Some(check::at_most(
            "businessUnit",
            business_unit,
            MAX_BUSINESS_UNIT,
        )?);
        Ok(self)
    }

    pub fn address_type(&mut self, address_type: AddressType) -> &mut Self {
        self.inner.address_type = Some(address_type);
        self
    }

    /// Set the address type from its wire code (`PRV` or `COM`).
    pub fn address_type_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.address_type = Some(code.parse()?);
        Ok(self)
    }

    pub fn address_type_private(&mut self) -> &mut Self {
        self.address_type(AddressType::Private)
    }

    pub fn address_type_commercial(&mut self) -> &mut Self {
        self.address_type(AddressType::Commercial)
    }

    pub fn build(&self) -> AddressWithType {
        self.inner.clone()
    }
}
