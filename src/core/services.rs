//! Order type and the optional services booked with an order.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::address::Address;
use super::check::{self, patterns};
use super::codes::{
    DeliveryDay, ExtraPickup, NotificationChannel, OrderType, PersonalDeliveryType,
    ProactiveChannel, ProactiveRule,
};
use super::error::ValidationError;
use super::international::{International, date_number};

pub const MAX_PROACTIVE_NOTIFICATIONS: usize = 5;

pub const MAX_TOUR: u32 = 999;
pub const MAX_QUANTITY: u32 = 99_999;
pub const MAX_LENGTH_BOX_ID: usize = 100;
pub const MAX_LENGTH_BOX_TAN: usize = 6;

pub const MAX_PARCEL_SHOP_ID: u64 = 99_999_999_999_999_999;
pub const MAX_LENGTH_PARCEL_SHOP_PUDO_ID: usize = 20;

pub const MAX_LENGTH_PERSONAL_DELIVERY_FIELD: usize = 30;
pub const MAX_LENGTH_PERSON_ID: usize = 35;

pub const MAX_LENGTH_DAY: usize = 20;
pub const MAX_DELIVERY_DATE: u32 = 99_999_999;

pub const MAX_LENGTH_NOTIFICATION_VALUE: usize = 50;
pub const MAX_PROACTIVE_RULE: u8 = 31;

/// Order type plus every service booked for the order.
///
/// The order type tells the carrier which of the sub-records apply; the
/// combination itself is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAndServiceData {
    order_type: Option<OrderType>,
    saturday_delivery: bool,
    ex_works_delivery: bool,
    guarantee: Option<bool>,
    tyres: Option<bool>,
    food: Option<bool>,
    personal_delivery: Option<PersonalDelivery>,
    pickup: Option<Pickup>,
    parcel_shop_delivery: Option<ParcelShopDelivery>,
    predict: Option<Notification>,
    personal_delivery_notification: Option<Notification>,
    proactive_notification: Vec<ProactiveNotification>,
    delivery: Option<Delivery>,
    invoice_address: Option<Address>,
    country_specific_service: Option<String>,
    international: Option<International>,
}

impl ProductAndServiceData {
    pub fn builder() -> ProductAndServiceDataBuilder {
        ProductAndServiceDataBuilder::default()
    }

    pub fn order_type(&self) -> Option<OrderType> {
        self.order_type
    }

    pub fn saturday_delivery(&self) -> bool {
        self.saturday_delivery
    }

    pub fn ex_works_delivery(&self) -> bool {
        self.ex_works_delivery
    }

    pub fn guarantee(&self) -> Option<bool> {
        self.guarantee
    }

    pub fn tyres(&self) -> Option<bool> {
        self.tyres
    }

    pub fn food(&self) -> Option<bool> {
        self.food
    }

    pub fn personal_delivery(&self) -> Option<&PersonalDelivery> {
        self.personal_delivery.as_ref()
    }

    pub fn pickup(&self) -> Option<&Pickup> {
        self.pickup.as_ref()
    }

    pub fn parcel_shop_delivery(&self) -> Option<&ParcelShopDelivery> {
        self.parcel_shop_delivery.as_ref()
    }

    pub fn predict(&self) -> Option<&Notification> {
        self.predict.as_ref()
    }

    pub fn personal_delivery_notification(&self) -> Option<&Notification> {
        self.personal_delivery_notification.as_ref()
    }

    pub fn proactive_notification(&self) -> &[ProactiveNotification] {
        &self.proactive_notification
    }

    pub fn delivery(&self) -> Option<&Delivery> {
        self.delivery.as_ref()
    }

    pub fn invoice_address(&self) -> Option<&Address> {
        self.invoice_address.as_ref()
    }

    pub fn country_specific_service(&self) -> Option<&str> {
        self.country_specific_service.as_deref()
    }

    pub fn international(&self) -> Option<&International> {
        self.international.as_ref()
    }
}

/// Builder for [`ProductAndServiceData`].
#[derive(Debug, Clone, Default)]
pub struct ProductAndServiceDataBuilder {
    inner: ProductAndServiceData,
}

impl ProductAndServiceDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_type(&mut self, order_type: OrderType) -> &mut Self {
        self.inner.order_type = Some(order_type);
        self
    }

    pub fn order_type_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.order_type = Some(code.parse()?);
        Ok(self)
    }

    pub fn order_type_consignment(&mut self) -> &mut Self {
        self.order_type(OrderType::Consignment)
    }

    pub fn order_type_collection_request(&mut self) -> &mut Self {
        self.order_type(OrderType::CollectionRequestOrder)
    }

    pub fn order_type_pickup_information(&mut self) -> &mut Self {
        self.order_type(OrderType::PickupInformation)
    }

    pub fn saturday_delivery(&mut self, saturday: bool) -> &mut Self {
        self.inner.saturday_delivery = saturday;
        self
    }

    pub fn ex_works_delivery(&mut self, ex_works: bool) -> &mut Self {
        self.inner.ex_works_delivery = ex_works;
        self
    }

    pub fn guarantee(&mut self, guarantee: bool) -> &mut Self {
        self.inner.guarantee = Some(guarantee);
        self
    }

    pub fn tyres(&mut self, tyres: bool) -> &mut Self {
        self.inner.tyres = Some(tyres);
        self
    }

    pub fn food(&mut self, food: bool) -> &mut Self {
        self.inner.food = Some(food);
        self
    }

    pub fn personal_delivery(&mut self, personal_delivery: PersonalDelivery) -> &mut Self {
        self.inner.personal_delivery = Some(personal_delivery);
        self
    }

    pub fn pickup(&mut self, pickup: Pickup) -> &mut Self {
        self.inner.pickup = Some(pickup);
        self
    }

    pub fn parcel_shop_delivery(&mut self, delivery: ParcelShopDelivery) -> &mut Self {
        self.inner.parcel_shop_delivery = Some(delivery);
        self
    }

    pub fn predict(&mut self, predict: Notification) -> &mut Self {
        self.inner.predict = Some(predict);
        self
    }

    pub fn personal_delivery_notification(&mut self, notification: Notification) -> &mut Self {
        self.inner.personal_delivery_notification = Some(notification);
        self
    }

    pub fn proactive_notifications(
        &mut self,
        notifications: Vec<ProactiveNotification>,
    ) -> Result<&mut Self, ValidationError> {
        self.inner.proactive_notification = check::capped(
            "proactiveNotification",
            notifications,
            MAX_PROACTIVE_NOTIFICATIONS,
        )?;
        Ok(self)
    }

    pub fn add_proactive_notification(
        &mut self,
        notification: ProactiveNotification,
    ) -> Result<&mut Self, ValidationError> {
        check::push_capped(
            "proactiveNotification",
            &mut self.inner.proactive_notification,
            notification,
            MAX_PROACTIVE_NOTIFICATIONS,
        )?;
        Ok(self)
    }

    pub fn delivery(&mut self, delivery: Delivery) -> &mut Self {
        self.inner.delivery = Some(delivery);
        self
    }

    pub fn invoice_address(&mut self, address: Address) -> &mut Self {
        self.inner.invoice_address = Some(address);
        self
    }

    pub fn country_specific_service(&mut self, service: impl Into<String>) -> &mut Self {
        self.inner.country_specific_service = Some(service.into());
        self
    }

    pub fn international(&mut self, international: International) -> &mut Self {
        self.inner.international = Some(international);
        self
    }

    pub fn build(&self) -> ProductAndServiceData {
        self.inner.clone()
    }
}

/// Collection of parcels at an address other than the sender's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pickup {
    tour: Option<u32>,
    quantity: Option<u32>,
    date: Option<u32>,
    #[serde(rename = "fromTime1")]
    from_time1: Option<String>,
    #[serde(rename = "toTime1")]
    to_time1: Option<String>,
    #[serde(rename = "fromTime2")]
    from_time2: Option<String>,
    #[serde(rename = "toTime2")]
    to_time2: Option<String>,
    extra_pickup: Option<ExtraPickup>,
    box_id: Option<String>,
    box_tan: Option<String>,
    address: Option<Address>,
}

impl Pickup {
    pub fn builder() -> PickupBuilder {
        PickupBuilder::default()
    }

    pub fn tour(&self) -> Option<u32> {
        self.tour
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    /// Pickup date as a `YYMMDD` or `YYYYMMDD` number.
    pub fn date(&self) -> Option<u32> {
        self.date
    }

    pub fn from_time1(&self) -> Option<&str> {
        self.from_time1.as_deref()
    }

    pub fn to_time1(&self) -> Option<&str> {
        self.to_time1.as_deref()
    }

    pub fn from_time2(&self) -> Option<&str> {
        self.from_time2.as_deref()
    }

    pub fn to_time2(&self) -> Option<&str> {
        self.to_time2.as_deref()
    }

    pub fn extra_pickup(&self) -> Option<ExtraPickup> {
        self.extra_pickup
    }

    pub fn box_id(&self) -> Option<&str> {
        self.box_id.as_deref()
    }

    pub fn box_tan(&self) -> Option<&str> {
        self.box_tan.as_deref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }
}

/// Builder for [`Pickup`].
#[derive(Debug, Clone, Default)]
pub struct PickupBuilder {
    inner: Pickup,
}

impl PickupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tour(&mut self, tour: u32) -> Result<&mut Self, ValidationError> {
        self.inner.tour = Some(check::at_most("tour", tour, MAX_TOUR)?);
        Ok(self)
    }

    pub fn quantity(&mut self, quantity: u32) -> Result<&mut Self, ValidationError> {
        self.inner.quantity = Some(check::at_most("quantity", quantity, MAX_QUANTITY)?);
        Ok(self)
    }

    pub fn date(&mut self, date: u32) -> Result<&mut Self, ValidationError> {
        self.inner.date = Some(check::digits_match("date", date, &patterns::PICKUP_DATE)?);
        Ok(self)
    }

    pub fn date_on(&mut self, date: NaiveDate) -> Result<&mut Self, ValidationError> {
        self.date(date_number(date))
    }

    pub fn from_time1(&mut self, time: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.from_time1 = Some(check::matches("fromTime1", time.into(), &patterns::HOUR_MINUTE)?);
        Ok(self)
    }

    pub fn to_time1(&mut self, time: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.to_time1 = Some(check::matches("toTime1", time.into(), &patterns::HOUR_MINUTE)?);
        Ok(self)
    }

    pub fn from_time2(&mut self, time: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.from_time2 = Some(check::matches("fromTime2", time.into(), &patterns::HOUR_MINUTE)?);
        Ok(self)
    }

    pub fn to_time2(&mut self, time: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.to_time2 = Some(check::matches("toTime2", time.into(), &patterns::HOUR_MINUTE)?);
        Ok(self)
    }

    pub fn extra_pickup(&mut self, extra: ExtraPickup) -> &mut Self {
        self.inner.extra_pickup = Some(extra);
        self
    }

    pub fn extra_pickup_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.extra_pickup = Some(code.parse()?);
        Ok(self)
    }

    pub fn box_id(&mut self, box_id: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.box_id = Some(check::max_chars("boxId", box_id.into(), MAX_LENGTH_BOX_ID)?);
        Ok(self)
    }

    pub fn box_tan(&mut self, box_tan: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.box_tan = Some(check::max_chars("boxTan", box_tan.into(), MAX_LENGTH_BOX_TAN)?);
        Ok(self)
    }

    pub fn address(&mut self, address: Address) -> &mut Self {
        self.inner.address = Some(address);
        self
    }

    pub fn build(&self) -> Pickup {
        self.inner.clone()
    }
}

/// Delivery to a parcel shop instead of the recipient's address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelShopDelivery {
    parcel_shop_id: Option<u64>,
    parcel_shop_pudo_id: Option<String>,
    notification: Option<Notification>,
}

impl ParcelShopDelivery {
    pub fn builder() -> ParcelShopDeliveryBuilder {
        ParcelShopDeliveryBuilder::default()
    }

    pub fn parcel_shop_id(&self) -> Option<u64> {
        self.parcel_shop_id
    }

    pub fn parcel_shop_pudo_id(&self) -> Option<&str> {
        self.parcel_shop_pudo_id.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }
}

/// Builder for [`ParcelShopDelivery`].
#[derive(Debug, Clone, Default)]
pub struct ParcelShopDeliveryBuilder {
    inner: ParcelShopDelivery,
}

impl ParcelShopDeliveryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parcel_shop_id(&mut self, id: u64) -> Result<&mut Self, ValidationError> {
        self.inner.parcel_shop_id = Some(check::at_most("parcelShopId", id, MAX_PARCEL_SHOP_ID)?);
        Ok(self)
    }

    pub fn parcel_shop_pudo_id(&mut self, id: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.parcel_shop_pudo_id = Some(check::max_chars(
            "parcelShopPudoId",
            id.into(),
            MAX_LENGTH_PARCEL_SHOP_PUDO_ID,
        )?);
        Ok(self)
    }

    pub fn notification(&mut self, notification: Notification) -> &mut Self {
        self.inner.notification = Some(notification);
        self
    }

    pub fn build(&self) -> ParcelShopDelivery {
        self.inner.clone()
    }
}

/// Hand-over to a named person or department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDelivery {
    #[serde(rename = "type")]
    delivery_type: Option<PersonalDeliveryType>,
    floor: Option<String>,
    building: Option<String>,
    department: Option<String>,
    name: Option<String>,
    phone: Option<String>,
    person_id: Option<String>,
}

impl PersonalDelivery {
    pub fn builder() -> PersonalDeliveryBuilder {
        PersonalDeliveryBuilder::default()
    }

    pub fn delivery_type(&self) -> Option<PersonalDeliveryType> {
        self.delivery_type
    }

    pub fn floor(&self) -> Option<&str> {
        self.floor.as_deref()
    }

    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn person_id(&self) -> Option<&str> {
        self.person_id.as_deref()
    }
}

/// Builder for [`PersonalDelivery`].
#[derive(Debug, Clone, Default)]
pub struct PersonalDeliveryBuilder {
    inner: PersonalDelivery,
}

impl PersonalDeliveryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivery_type(&mut self, delivery_type: PersonalDeliveryType) -> &mut Self {
        self.inner.delivery_type = Some(delivery_type);
        self
    }

    pub fn delivery_type_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.delivery_type = Some(code.parse()?);
        Ok(self)
    }

    pub fn floor(&mut self, floor: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.floor = Some(check::max_chars(
            "floor",
            floor.into(),
            MAX_LENGTH_PERSONAL_DELIVERY_FIELD,
        )?);
        Ok(self)
    }

    pub fn building(&mut self, building: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.building = Some(check::max_chars(
            "building",
            building.into(),
            MAX_LENGTH_PERSONAL_DELIVERY_FIELD,
        )?);
        Ok(self)
    }

    pub fn department(&mut self, department: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.department = Some(check::max_chars(
            "department",
            department.into(),
            MAX_LENGTH_PERSONAL_DELIVERY_FIELD,
        )?);
        Ok(self)
    }

    pub fn name(&mut self, name: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.name = Some(check::max_chars(
            "name",
            name.into(),
            MAX_LENGTH_PERSONAL_DELIVERY_FIELD,
        )?);
        Ok(self)
    }

    pub fn phone(&mut self, phone: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.phone = Some(check::max_chars(
            "phone",
            phone.into(),
            MAX_LENGTH_PERSONAL_DELIVERY_FIELD,
        )?);
        Ok(self)
    }

    pub fn person_id(&mut self, person_id: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.person_id = Some(check::max_chars(
            "personId",
            person_id.into(),
            MAX_LENGTH_PERSON_ID,
        )?);
        Ok(self)
    }

    pub fn build(&self) -> PersonalDelivery {
        self.inner.clone()
    }
}

/// Delivery days travel comma-separated, e.g. `"1,2,5"`.
pub fn pack_delivery_days(days: &[DeliveryDay]) -> String {
    days.iter().map(DeliveryDay::code).collect::<Vec<_>>().join(",")
}

fn serialize_delivery_days<S: Serializer>(
    days: &[DeliveryDay],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&pack_delivery_days(days))
}

/// Restriction of the delivery to given weekdays, dates and hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(serialize_with = "serialize_delivery_days")]
    day: Vec<DeliveryDay>,
    date_from: Option<u32>,
    date_to: Option<u32>,
    time_from: Option<String>,
    time_to: Option<String>,
}

impl Delivery {
    pub fn builder() -> DeliveryBuilder {
        DeliveryBuilder::default()
    }

    pub fn day(&self) -> &[DeliveryDay] {
        &self.day
    }

    pub fn date_from(&self) -> Option<u32> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<u32> {
        self.date_to
    }

    pub fn time_from(&self) -> Option<&str> {
        self.time_from.as_deref()
    }

    pub fn time_to(&self) -> Option<&str> {
        self.time_to.as_deref()
    }
}

/// Builder for [`Delivery`].
#[derive(Debug, Clone, Default)]
pub struct DeliveryBuilder {
    inner: Delivery,
}

impl DeliveryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the delivery days from their packed form, e.g. `"1, 3,5"`.
    ///
    /// Items are trimmed before they are checked; an empty item is rejected.
    ///
    /// ```
    /// use paket::core::{Delivery, DeliveryDay};
    ///
    /// let delivery = Delivery::builder().day("1, 5").unwrap().build();
    /// assert_eq!(delivery.day(), &[DeliveryDay::Monday, DeliveryDay::Friday]);
    /// ```
    pub fn day(&mut self, packed: &str) -> Result<&mut Self, ValidationError> {
        let packed = check::max_chars("day", packed.to_string(), MAX_LENGTH_DAY)?;
        let days = packed
            .split(',')
            .map(|item| item.trim().parse::<DeliveryDay>())
            .collect::<Result<Vec<_>, _>>()?;
        self.inner.day = days;
        Ok(self)
    }

    /// Replace the delivery days. The packed form is held to the same
    /// length limit as [`day`](Self::day) input.
    pub fn days(&mut self, days: Vec<DeliveryDay>) -> Result<&mut Self, ValidationError> {
        check::max_chars("day", pack_delivery_days(&days), MAX_LENGTH_DAY)?;
        self.inner.day = days;
        Ok(self)
    }

    pub fn add_day(&mut self, day: DeliveryDay) -> Result<&mut Self, ValidationError> {
        let mut days = self.inner.day.clone();
        days.push(day);
        self.days(days)
    }

    pub fn date_from(&mut self, date: u32) -> Result<&mut Self, ValidationError> {
        self.inner.date_from = Some(check::at_most("dateFrom", date, MAX_DELIVERY_DATE)?);
        Ok(self)
    }

    pub fn date_to(&mut self, date: u32) -> Result<&mut Self, ValidationError> {
        self.inner.date_to = Some(check::at_most("dateTo", date, MAX_DELIVERY_DATE)?);
        Ok(self)
    }

    pub fn time_from(&mut self, time: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.time_from = Some(check::matches("timeFrom", time.into(), &patterns::HOUR_MINUTE)?);
        Ok(self)
    }

    pub fn time_to(&mut self, time: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.time_to = Some(check::matches("timeTo", time.into(), &patterns::HOUR_MINUTE)?);
        Ok(self)
    }

    pub fn build(&self) -> Delivery {
        self.inner.clone()
    }
}

/// Message sent to the recipient, e.g. the predict delivery window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    channel: Option<NotificationChannel>,
    value: Option<String>,
    language: Option<String>,
}

impl Notification {
    pub fn builder() -> NotificationBuilder {
        NotificationBuilder::default()
    }

    pub fn channel(&self) -> Option<NotificationChannel> {
        self.channel
    }

    /// Email address or phone number, depending on the channel.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Builder for [`Notification`].
#[derive(Debug, Clone, Default)]
pub struct NotificationBuilder {
    inner: Notification,
}

impl NotificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&mut self, channel: NotificationChannel) -> &mut Self {
        self.inner.channel = Some(channel);
        self
    }

    pub fn channel_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.channel = Some(code.parse()?);
        Ok(self)
    }

    pub fn channel_email(&mut self) -> &mut Self {
        self.channel(NotificationChannel::Email)
    }

    pub fn channel_sms(&mut self) -> &mut Self {
        self.channel(NotificationChannel::Sms)
    }

    pub fn value(&mut self, value: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.value = Some(check::max_chars(
            "value",
            value.into(),
            MAX_LENGTH_NOTIFICATION_VALUE,
        )?);
        Ok(self)
    }

    pub fn language(&mut self, language: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.language = Some(check::matches("language", language.into(), &patterns::LANGUAGE)?);
        Ok(self)
    }

    pub fn build(&self) -> Notification {
        self.inner.clone()
    }
}

/// Notification triggered by tracking events, selected by a rule bit set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProactiveNotification {
    channel: Option<ProactiveChannel>,
    value: Option<String>,
    language: Option<String>,
    rule: Option<u8>,
}

impl ProactiveNotification {
    pub fn builder() -> ProactiveNotificationBuilder {
        ProactiveNotificationBuilder::default()
    }

    pub fn channel(&self) -> Option<ProactiveChannel> {
        self.channel
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn rule(&self) -> Option<u8> {
        self.rule
    }

    /// The events selected by the rule bit set.
    pub fn rules(&self) -> Vec<ProactiveRule> {
        let bits = self.rule.unwrap_or(0);
        ProactiveRule::ALL
            .iter()
            .copied()
            .filter(|r| bits & r.bit() != 0)
            .collect()
    }
}

/// Builder for [`ProactiveNotification`].
#[derive(Debug, Clone, Default)]
pub struct ProactiveNotificationBuilder {
    inner: ProactiveNotification,
}

impl ProactiveNotificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&mut self, channel: ProactiveChannel) -> &mut Self {
        self.inner.channel = Some(channel);
        self
    }

    pub fn channel_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.inner.channel = Some(code.parse()?);
        Ok(self)
    }

    pub fn value(&mut self, value: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.value = Some(check::max_chars(
            "value",
            value.into(),
            MAX_LENGTH_NOTIFICATION_VALUE,
        )?);
        Ok(self)
    }

    pub fn language(&mut self, language: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.inner.language = Some(check::matches("language", language.into(), &patterns::LANGUAGE)?);
        Ok(self)
    }

    /// Raw rule bit set, at most 31 (all events).
    pub fn rule(&mut self, rule: u8) -> Result<&mut Self, ValidationError> {
        self.inner.rule = Some(check::at_most("rule", rule, MAX_PROACTIVE_RULE)?);
        Ok(self)
    }

    pub fn add_rule(&mut self, rule: ProactiveRule) -> &mut Self {
        self.inner.rule = Some(self.inner.rule.unwrap_or(0) | rule.bit());
        self
    }

    pub fn build(&self) -> ProactiveNotification {
        self.inner.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Constraint;

    #[test]
    fn order_type_is_not_cross_checked() {
        let data = ProductAndServiceData::builder()
            .order_type_pickup_information()
            .predict(Notification::builder().channel_email().build())
            .build();
        assert_eq!(data.order_type(), Some(OrderType::PickupInformation));
        assert!(data.predict().is_some());
        assert!(!data.saturday_delivery());
        assert!(!data.ex_works_delivery());
    }

    #[test]
    fn proactive_notification_cap() {
        let n = ProactiveNotification::builder()
            .add_rule(ProactiveRule::Delivery)
            .build();
        let mut b = ProductAndServiceData::builder();
        for _ in 0..MAX_PROACTIVE_NOTIFICATIONS {
            b.add_proactive_notification(n.clone()).unwrap();
        }
        let err = b.add_proactive_notification(n.clone()).unwrap_err();
        assert_eq!(err.constraint, Constraint::Cardinality(5));
        assert!(b.proactive_notifications(vec![n; 6]).is_err());
        assert_eq!(b.build().proactive_notification().len(), 5);
    }

    #[test]
    fn pickup_date_forms() {
        let mut b = Pickup::builder();
        assert!(b.date(260307).is_ok());
        assert!(b.date(20260307).is_ok());
        assert!(b.date(2026030).is_err());
        assert!(b.date(12345).is_err());
        assert!(b.date(202603071).is_err());
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(b.date_on(date).unwrap().build().date(), Some(20261019));
    }

    #[test]
    fn pickup_times() {
        let mut b = Pickup::builder();
        assert!(b.from_time1("0800").is_ok());
        assert!(b.to_time1("2359").is_ok());
        assert!(b.to_time2("2400").is_err());
        assert!(b.from_time2("800").is_err());
        let pickup = b.build();
        assert_eq!(pickup.to_time1(), Some("2359"));
        assert!(pickup.to_time2().is_none());
    }

    #[test]
    fn delivery_days_are_trimmed_and_checked() {
        let mut b = Delivery::builder();
        b.day(" 1 ,2,6").unwrap();
        assert_eq!(
            b.build().day(),
            &[DeliveryDay::Monday, DeliveryDay::Tuesday, DeliveryDay::Saturday]
        );
        assert!(b.day("7").is_err());
        assert!(b.day("").is_err());
        assert!(b.day("1,,2").is_err());
        let err = b.day("0, 1, 2, 3, 4, 5, 6, 0").unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxLength(MAX_LENGTH_DAY));
        assert_eq!(b.build().day().len(), 3);
        assert_eq!(pack_delivery_days(b.build().day()), "1,2,6");
    }

    #[test]
    fn added_days_respect_packed_length() {
        let mut b = Delivery::builder();
        for _ in 0..10 {
            b.add_day(DeliveryDay::Monday).unwrap();
        }
        assert_eq!(pack_delivery_days(b.build().day()).len(), 19);
        let err = b.add_day(DeliveryDay::Tuesday).unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxLength(MAX_LENGTH_DAY));
        assert_eq!(b.build().day().len(), 10);

        let packed = pack_delivery_days(b.build().day());
        assert!(Delivery::builder().day(&packed).is_ok());
        assert!(b.days(vec![DeliveryDay::Sunday; 11]).is_err());
        assert_eq!(b.build().day().len(), 10);
    }

    #[test]
    fn proactive_rule_bits() {
        let mut b = ProactiveNotification::builder();
        b.add_rule(ProactiveRule::PickUp).add_rule(ProactiveRule::OutForDelivery);
        assert_eq!(b.build().rule(), Some(17));
        assert_eq!(
            b.build().rules(),
            vec![ProactiveRule::PickUp, ProactiveRule::OutForDelivery]
        );
        assert!(b.rule(31).is_ok());
        assert!(b.rule(32).is_err());
        assert_eq!(b.build().rule(), Some(31));
    }

    #[test]
    fn proactive_channel_accepts_fax() {
        let mut b = ProactiveNotification::builder();
        assert!(b.channel_code("6").is_ok());
        assert!(b.channel_code("4").is_err());
        assert_eq!(b.build().channel(), Some(ProactiveChannel::Fax));

        let mut n = Notification::builder();
        assert!(n.channel_code("6").is_err());
    }

    #[test]
    fn parcel_shop_id_ceiling() {
        let mut b = ParcelShopDelivery::builder();
        assert!(b.parcel_shop_id(MAX_PARCEL_SHOP_ID).is_ok());
        assert!(b.parcel_shop_id(MAX_PARCEL_SHOP_ID + 1).is_err());
    }
}
