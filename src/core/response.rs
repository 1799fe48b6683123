//! Replies of the shipment and tracking services.
//!
//! These values are produced by the SOAP decoder; they carry whatever the
//! carrier sent and are not re-validated.

use serde::{Deserialize, Serialize};

use super::codes::{OutputFormatType, TrackingStatus};

/// Reply of `storeOrders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreOrdersResponse {
    pub(crate) output: Option<OutputType>,
    pub(crate) shipment_responses: Vec<ShipmentResponse>,
    #[serde(rename = "parcellabelsPDF")]
    pub(crate) parcellabels_pdf: Option<String>,
}

impl StoreOrdersResponse {
    /// Combined label document of the call.
    pub fn output(&self) -> Option<&OutputType> {
        self.output.as_ref()
    }

    /// One entry per submitted order. A single reply element is returned as
    /// a one-element slice.
    pub fn shipment_responses(&self) -> &[ShipmentResponse] {
        &self.shipment_responses
    }

    /// Base64 PDF labels, sent by older service versions.
    pub fn parcellabels_pdf(&self) -> Option<&str> {
        self.parcellabels_pdf.as_deref()
    }

    pub fn has_errors(&self) -> bool {
        self.shipment_responses.iter().any(ShipmentResponse::is_error)
    }
}

/// Label document: format tag plus base64 payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputType {
    pub(crate) format: Option<String>,
    pub(crate) content: Option<String>,
}

impl OutputType {
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// The format tag as a known output format, if it is one.
    pub fn format_kind(&self) -> Option<OutputFormatType> {
        self.format.as_deref().and_then(OutputFormatType::from_code)
    }

    /// Base64 encoded label data, passed through untouched.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Outcome for one order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentResponse {
    pub(crate) identification_number: Option<String>,
    pub(crate) mps_id: Option<String>,
    pub(crate) parcel_information: Vec<ParcelInformation>,
    pub(crate) faults: Vec<FaultCodeType>,
}

impl ShipmentResponse {
    pub fn identification_number(&self) -> Option<&str> {
        self.identification_number.as_deref()
    }

    pub fn mps_id(&self) -> Option<&str> {
        self.mps_id.as_deref()
    }

    pub fn parcel_information(&self) -> &[ParcelInformation] {
        &self.parcel_information
    }

    pub fn faults(&self) -> &[FaultCodeType] {
        &self.faults
    }

    pub fn is_error(&self) -> bool {
        !self.faults.is_empty()
    }
}

/// Label number and label of one parcel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParcelInformation {
    pub(crate) parcel_label_number: Option<String>,
    pub(crate) dpd_reference: Option<String>,
    pub(crate) output: Option<OutputType>,
}

impl ParcelInformation {
    pub fn parcel_label_number(&self) -> Option<&str> {
        self.parcel_label_number.as_deref()
    }

    pub fn dpd_reference(&self) -> Option<&str> {
        self.dpd_reference.as_deref()
    }

    pub fn output(&self) -> Option<&OutputType> {
        self.output.as_ref()
    }
}

/// Business fault reported for an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaultCodeType {
    pub(crate) fault_code: Option<String>,
    pub(crate) message: Option<String>,
}

impl FaultCodeType {
    pub fn fault_code(&self) -> Option<&str> {
        self.fault_code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Reply of `getTrackingData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingResult {
    pub(crate) shipment_info: Option<ShipmentInfo>,
    pub(crate) status_info: Vec<StatusInfo>,
    pub(crate) contact_info: Vec<ContentItem>,
}

impl TrackingResult {
    pub fn shipment_info(&self) -> Option<&ShipmentInfo> {
        self.shipment_info.as_ref()
    }

    /// Every lifecycle step, reached or not, in service order.
    pub fn status_info(&self) -> &[StatusInfo] {
        &self.status_info
    }

    pub fn contact_info(&self) -> &[ContentItem] {
        &self.contact_info
    }

    /// The step the service marks as current.
    pub fn current_status(&self) -> Option<&StatusInfo> {
        self.status_info.iter().find(|s| s.is_current_status)
    }

    pub fn is_delivered(&self) -> bool {
        self.status_info
            .iter()
            .any(|s| s.status_has_been_reached && s.status_kind() == Some(TrackingStatus::Delivered))
    }
}

/// Static facts about a tracked shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentInfo {
    pub(crate) receiver: Option<ContentItem>,
    pub(crate) predict_information: Option<ContentItem>,
    pub(crate) service_description: Option<ContentItem>,
    pub(crate) additional_service_elements: Option<ContentItem>,
    pub(crate) tracking_property: Vec<TrackingProperty>,
}

impl ShipmentInfo {
    pub fn receiver(&self) -> Option<&ContentItem> {
        self.receiver.as_ref()
    }

    pub fn predict_information(&self) -> Option<&ContentItem> {
        self.predict_information.as_ref()
    }

    pub fn service_description(&self) -> Option<&ContentItem> {
        self.service_description.as_ref()
    }

    pub fn additional_service_elements(&self) -> Option<&ContentItem> {
        self.additional_service_elements.as_ref()
    }

    pub fn tracking_property(&self) -> &[TrackingProperty] {
        &self.tracking_property
    }

    /// Value of the first tracking property named `key`.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.tracking_property
            .iter()
            .find(|p| p.key.as_deref() == Some(key))
            .and_then(|p| p.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingProperty {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<String>,
}

impl TrackingProperty {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// One step of the parcel lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusInfo {
    pub(crate) status: Option<String>,
    pub(crate) label: Option<ContentLine>,
    pub(crate) description: Option<ContentItem>,
    pub(crate) status_has_been_reached: bool,
    pub(crate) is_current_status: bool,
    pub(crate) show_contact_info: bool,
    pub(crate) location: Option<ContentLine>,
    pub(crate) date: Option<ContentLine>,
    pub(crate) normal_items: Vec<ContentItem>,
    pub(crate) important_items: Vec<ContentItem>,
    pub(crate) error_items: Vec<ContentItem>,
}

impl StatusInfo {
    /// Raw status code as sent by the service.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The status code as a known lifecycle step. Codes added by the
    /// carrier later map to `None`.
    pub fn status_kind(&self) -> Option<TrackingStatus> {
        self.status.as_deref().and_then(TrackingStatus::from_code)
    }

    pub fn label(&self) -> Option<&ContentLine> {
        self.label.as_ref()
    }

    pub fn description(&self) -> Option<&ContentItem> {
        self.description.as_ref()
    }

    pub fn status_has_been_reached(&self) -> bool {
        self.status_has_been_reached
    }

    pub fn is_current_status(&self) -> bool {
        self.is_current_status
    }

    pub fn show_contact_info(&self) -> bool {
        self.show_contact_info
    }

    pub fn location(&self) -> Option<&ContentLine> {
        self.location.as_ref()
    }

    pub fn date(&self) -> Option<&ContentLine> {
        self.date.as_ref()
    }

    pub fn normal_items(&self) -> &[ContentItem] {
        &self.normal_items
    }

    pub fn important_items(&self) -> &[ContentItem] {
        &self.important_items
    }

    pub fn error_items(&self) -> &[ContentItem] {
        &self.error_items
    }
}

/// Display block: a heading line plus content lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentItem {
    pub(crate) label: Option<ContentLine>,
    pub(crate) content: Vec<ContentLine>,
    pub(crate) link_target: Option<String>,
}

impl ContentItem {
    pub fn label(&self) -> Option<&ContentLine> {
        self.label.as_ref()
    }

    /// Content lines; a single reply element is returned as a one-element slice.
    pub fn content(&self) -> &[ContentLine] {
        &self.content
    }

    pub fn link_target(&self) -> Option<&str> {
        self.link_target.as_deref()
    }

    /// Content lines joined by newlines.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentLine::content)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A line of display text with formatting hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLine {
    pub(crate) content: Option<String>,
    pub(crate) bold: bool,
    pub(crate) paragraph: bool,
}

impl ContentLine {
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn paragraph(&self) -> bool {
        self.paragraph
    }
}
