use url::Url;

use crate::core::*;

use super::config::{ApiConfig, Environment};
use super::decode::{FromXml, decode_reply};
use super::encode::{login_envelope, store_orders_envelope, tracking_envelope};
use super::Service;

/// Sends one SOAP envelope and returns the raw reply body.
///
/// Implementations return the body for fault replies too (HTTP 500), so the
/// dispatcher can map carrier faults. Only failures that leave no readable
/// reply are errors.
pub trait Transport {
    fn post(&self, url: &str, soap_action: &str, envelope: &str) -> Result<String, PaketError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, url: &str, soap_action: &str, envelope: &str) -> Result<String, PaketError> {
        (**self).post(url, soap_action, envelope)
    }
}

/// Result of a remote call that reached the carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome<T> {
    Success(T),
    /// The carrier rejected the credentials or session token.
    AuthenticationFault(AuthenticationFault),
    /// The reply parsed but carried no result element.
    NoPayload,
}

impl<T> CallOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallOutcome<U> {
        match self {
            Self::Success(value) => CallOutcome::Success(f(value)),
            Self::AuthenticationFault(fault) => CallOutcome::AuthenticationFault(fault),
            Self::NoPayload => CallOutcome::NoPayload,
        }
    }
}

/// Dispatcher for the three carrier operations.
///
/// ```
/// use paket::core::{Credentials, PaketError};
/// use paket::soap::{Api, ApiConfig, Transport};
///
/// struct Offline;
///
/// impl Transport for Offline {
///     fn post(&self, _url: &str, _action: &str, _envelope: &str) -> Result<String, PaketError> {
///         Err(PaketError::Transport("offline".into()))
///     }
/// }
///
/// let api = Api::new(Offline, ApiConfig::default());
/// let credentials = Credentials::new("sandboxdpd", "secret").unwrap();
/// assert!(matches!(api.authenticate(&credentials), Err(PaketError::Transport(_))));
/// ```
#[derive(Debug, Clone)]
pub struct Api<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    /// The same dispatcher pointed at another environment.
    pub fn with_environment(self, environment: Environment) -> Self {
        Self {
            config: ApiConfig {
                environment,
                ..self.config
            },
            transport: self.transport,
        }
    }

    /// Exchange credentials for a session token (`getAuth`).
    pub fn authenticate(&self, credentials: &Credentials) -> Result<CallOutcome<Login>, PaketError> {
        let envelope = login_envelope(credentials)?;
        self.call(Service::Login, "getAuth", &envelope, "return")
    }

    /// Log in and turn the reply into the session header for later calls.
    pub fn open_session(
        &self,
        credentials: &Credentials,
    ) -> Result<CallOutcome<Authentication>, PaketError> {
        match self.authenticate(credentials)? {
            CallOutcome::Success(login) => Ok(CallOutcome::Success(Authentication::from_login(
                &login,
                credentials.message_language(),
            )?)),
            CallOutcome::AuthenticationFault(fault) => Ok(CallOutcome::AuthenticationFault(fault)),
            CallOutcome::NoPayload => Ok(CallOutcome::NoPayload),
        }
    }

    /// Submit orders and receive parcel numbers and labels (`storeOrders`).
    pub fn submit_orders(
        &self,
        auth: &Authentication,
        request: &StoreOrders,
    ) -> Result<CallOutcome<StoreOrdersResponse>, PaketError> {
        let envelope = store_orders_envelope(auth, request)?;
        self.call(Service::Shipment, "storeOrders", &envelope, "orderResult")
    }

    /// Fetch the lifecycle of one parcel (`getTrackingData`).
    pub fn fetch_tracking(
        &self,
        auth: &Authentication,
        request: &GetTrackingData,
    ) -> Result<CallOutcome<TrackingResult>, PaketError> {
        let envelope = tracking_envelope(auth, request)?;
        self.call(Service::ParcelLifeCycle, "getTrackingData", &envelope, "trackingresult")
    }

    /// Endpoint of `service` in the selected environment.
    pub fn endpoint(&self, service: Service) -> Result<Url, PaketError> {
        self.config
            .base_url()
            .join(service.path())
            .map_err(|e| PaketError::Config(format!("invalid endpoint for {}: {e}", service.name())))
    }

    fn call<R: FromXml>(
        &self,
        service: Service,
        operation: &str,
        envelope: &str,
        result_element: &str,
    ) -> Result<CallOutcome<R>, PaketError> {
        let url = self.endpoint(service)?;
        tracing::debug!(
            operation,
            endpoint = %url,
            environment = %self.config.environment,
            "calling carrier web service"
        );

        let reply = self
            .transport
            .post(url.as_str(), &service.soap_action(operation), envelope)?;
        let wrapper = format!("{operation}Response");
        let outcome = decode_reply(&reply, &wrapper, result_element)?;

        match &outcome {
            CallOutcome::AuthenticationFault(fault) => tracing::warn!(
                operation,
                error_code = %fault.error_code(),
                error_message = %fault.error_message(),
                "carrier rejected authentication"
            ),
            CallOutcome::NoPayload => tracing::debug!(
                operation,
                "reply carried no {result_element} element"
            ),
            CallOutcome::Success(_) => {}
        }
        Ok(outcome)
    }
}
