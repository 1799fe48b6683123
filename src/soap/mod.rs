//! SOAP 1.1 codec and dispatcher for the carrier's web services.
//!
//! # Services
//!
//! - **LoginService 2.0**: `getAuth`, exchanges credentials for a session token
//! - **ShipmentService 4.4**: `storeOrders`, creates shipments and labels
//! - **ParcelLifeCycleService 2.0**: `getTrackingData`, parcel tracking
//!
//! The network is reached only through the [`Transport`] trait; enable the
//! `client` feature for a blocking HTTP implementation.

mod api;
mod config;
mod decode;
mod encode;
pub(crate) mod xml_utils;

pub use api::{Api, CallOutcome, Transport};
pub use config::{
    ApiConfig, DEFAULT_PRODUCTION_URL, DEFAULT_STAGE_URL, DEFAULT_TIMEOUT_SECS, Environment,
};
pub use decode::{FromXml, decode_reply};
pub use encode::{WriteXml, login_envelope, store_orders_envelope, tracking_envelope};
pub use xml_utils::{MAX_XML_DEPTH, XmlNode, XmlWriter};

/// SOAP 1.1 envelope namespace.
pub const NS_SOAP_ENVELOPE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace of the session header.
pub const NS_AUTHENTICATION: &str = "http://dpd.com/common/service/types/Authentication/2.0";

/// One of the carrier's web services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Login,
    Shipment,
    ParcelLifeCycle,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "LoginService",
            Self::Shipment => "ShipmentService",
            Self::ParcelLifeCycle => "ParcelLifeCycleService",
        }
    }

    pub fn version(&self) -> &'static str {
        match self {
            Self::Login | Self::ParcelLifeCycle => "2.0",
            Self::Shipment => "4.4",
        }
    }

    /// Path below the environment base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "services/LoginService/V2_0/",
            Self::Shipment => "services/ShipmentService/V4_4/",
            Self::ParcelLifeCycle => "services/ParcelLifeCycleService/V2_0/",
        }
    }

    /// Target namespace of the operation elements.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Login => "http://dpd.com/common/service/types/LoginService/2.0",
            Self::Shipment => "http://dpd.com/common/service/types/ShipmentService/4.4",
            Self::ParcelLifeCycle => {
                "http://dpd.com/common/service/types/ParcelLifeCycleService/2.0"
            }
        }
    }

    pub fn soap_action(&self, operation: &str) -> String {
        format!(
            "http://dpd.com/common/service/{}/{}/{operation}",
            self.name(),
            self.version()
        )
    }
}
