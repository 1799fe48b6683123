//! Request and response entities, field validation and code lists.
//!
//! Each entity module also exports its field limits as constants
//! (`address::MAX_LENGTH_NAME1`, `shipment::MAX_ORDERS`, ...).

pub mod address;
pub mod auth;
pub(crate) mod check;
pub mod codes;
mod error;
pub mod international;
pub mod parcel;
pub mod printing;
pub mod response;
pub mod services;
pub mod shipment;

pub use address::{
    Address, AddressBuilder, AddressWithBusinessUnit, AddressWithBusinessUnitBuilder,
    AddressWithType, AddressWithTypeBuilder,
};
pub use auth::{Authentication, AuthenticationFault, Credentials, Login};
pub use codes::*;
pub use error::*;
pub use international::{
    AdditionalInvoiceLine, AdditionalInvoiceLineBuilder, International, InternationalBuilder,
};
pub use parcel::{Hazardous, HazardousBuilder, HigherInsurance, Parcel, ParcelBuilder};
pub use printing::{
    PrintOption, PrintOptionBuilder, PrintOptions, PrintOptionsBuilder, Printer, PrinterBuilder,
};
pub use response::{
    ContentItem, ContentLine, FaultCodeType, OutputType, ParcelInformation, ShipmentInfo,
    ShipmentResponse, StatusInfo, StoreOrdersResponse, TrackingProperty, TrackingResult,
};
pub use services::{
    Delivery, DeliveryBuilder, Notification, NotificationBuilder, ParcelShopDelivery,
    ParcelShopDeliveryBuilder, PersonalDelivery, PersonalDeliveryBuilder, Pickup, PickupBuilder,
    ProactiveNotification, ProactiveNotificationBuilder, ProductAndServiceData,
    ProductAndServiceDataBuilder,
};
pub use shipment::{
    GeneralShipmentData, GeneralShipmentDataBuilder, GetTrackingData, ShipmentServiceData,
    ShipmentServiceDataBuilder, StoreOrders, StoreOrdersBuilder,
};
