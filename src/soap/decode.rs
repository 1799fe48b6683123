//! Reply parsing.
//!
//! Replies are read into an [`XmlNode`] tree and mapped onto the response
//! entities by element local name, so namespace prefixes chosen by the
//! server do not matter. Missing elements leave the field unset.

use crate::core::*;

use super::CallOutcome;
use super::xml_utils::XmlNode;

/// Build a reply entity from its element.
pub trait FromXml: Sized {
    fn from_xml(node: &XmlNode) -> Self;
}

/// Unwrap `Envelope/Body/{wrapper}/{child}` into `T`.
///
/// A fault whose `detail` carries an `authenticationFault` becomes
/// [`CallOutcome::AuthenticationFault`]; any other fault is returned as
/// [`PaketError::Fault`]. A well-formed reply without the expected child is
/// [`CallOutcome::NoPayload`].
pub fn decode_reply<T: FromXml>(
    xml: &str,
    wrapper: &str,
    child: &str,
) -> Result<CallOutcome<T>, PaketError> {
    let root = XmlNode::parse(xml)?;
    if root.name != "Envelope" {
        return Err(PaketError::Xml(format!(
            "expected SOAP Envelope, found <{}>",
            root.name
        )));
    }
    let body = root
        .child("Body")
        .ok_or_else(|| PaketError::Xml("SOAP Envelope without Body".into()))?;

    if let Some(fault) = body.child("Fault") {
        return decode_fault(fault);
    }

    Ok(body
        .child(wrapper)
        .and_then(|w| w.child(child))
        .map(|node| CallOutcome::Success(T::from_xml(node)))
        .unwrap_or(CallOutcome::NoPayload))
}

fn decode_fault<T>(fault: &XmlNode) -> Result<CallOutcome<T>, PaketError> {
    let auth_fault = fault
        .child("detail")
        .and_then(|d| d.child("authenticationFault"));
    if let Some(node) = auth_fault {
        return Ok(CallOutcome::AuthenticationFault(AuthenticationFault::from_xml(node)));
    }
    Err(PaketError::Fault(SoapFault {
        code: fault.text_of("faultcode").unwrap_or_default(),
        message: fault.text_of("faultstring").unwrap_or_default(),
    }))
}

fn nested<T: FromXml>(node: &XmlNode, name: &str) -> Option<T> {
    node.child(name).map(T::from_xml)
}

fn repeated<T: FromXml>(node: &XmlNode, name: &str) -> Vec<T> {
    node.children_named(name).map(T::from_xml).collect()
}

impl FromXml for AuthenticationFault {
    fn from_xml(node: &XmlNode) -> Self {
        AuthenticationFault::new(
            node.text_of("errorCode").unwrap_or_default(),
            node.text_of("errorMessage").unwrap_or_default(),
        )
    }
}

impl FromXml for Login {
    fn from_xml(node: &XmlNode) -> Self {
        Login {
            delis_id: node.text_of("delisId"),
            customer_uid: node.text_of("customerUid"),
            auth_token: node.text_of("authToken"),
            depot: node.text_of("depot"),
            auth_token_expires: node.text_of("authTokenExpires"),
        }
    }
}

impl FromXml for StoreOrdersResponse {
    fn from_xml(node: &XmlNode) -> Self {
        StoreOrdersResponse {
            output: nested(node, "output"),
            shipment_responses: repeated(node, "shipmentResponses"),
            parcellabels_pdf: node.text_of("parcellabelsPDF"),
        }
    }
}

impl FromXml for OutputType {
    fn from_xml(node: &XmlNode) -> Self {
        OutputType {
            format: node.text_of("format"),
            content: node.text_of("content"),
        }
    }
}

impl FromXml for ShipmentResponse {
    fn from_xml(node: &XmlNode) -> Self {
        ShipmentResponse {
            identification_number: node.text_of("identificationNumber"),
            mps_id: node.text_of("mpsId"),
            parcel_information: repeated(node, "parcelInformation"),
            faults: repeated(node, "faults"),
        }
    }
}

impl FromXml for ParcelInformation {
    fn from_xml(node: &XmlNode) -> Self {
        ParcelInformation {
            parcel_label_number: node.text_of("parcelLabelNumber"),
            dpd_reference: node.text_of("dpdReference"),
            output: nested(node, "output"),
        }
    }
}

impl FromXml for FaultCodeType {
    fn from_xml(node: &XmlNode) -> Self {
        FaultCodeType {
            fault_code: node.text_of("faultCode"),
            message: node.text_of("message"),
        }
    }
}

impl FromXml for TrackingResult {
    fn from_xml(node: &XmlNode) -> Self {
        TrackingResult {
            shipment_info: nested(node, "shipmentInfo"),
            status_info: repeated(node, "statusInfo"),
            contact_info: repeated(node, "contactInfo"),
        }
    }
}

impl FromXml for ShipmentInfo {
    fn from_xml(node: &XmlNode) -> Self {
        ShipmentInfo {
            receiver: nested(node, "receiver"),
            predict_information: nested(node, "predictInformation"),
            service_description: nested(node, "serviceDescription"),
            additional_service_elements: nested(node, "additionalServiceElements"),
            tracking_property: repeated(node, "trackingProperty"),
        }
    }
}

impl FromXml for TrackingProperty {
    fn from_xml(node: &XmlNode) -> Self {
        TrackingProperty {
            key: node.text_of("key"),
            value: node.text_of("value"),
        }
    }
}

impl FromXml for StatusInfo {
    fn from_xml(node: &XmlNode) -> Self {
        StatusInfo {
            status: node.text_of("status"),
            label: nested(node, "label"),
            description: nested(node, "description"),
            status_has_been_reached: node.bool_of("statusHasBeenReached"),
            is_current_status: node.bool_of("isCurrentStatus"),
            show_contact_info: node.bool_of("showContactInfo"),
            location: nested(node, "location"),
            date: nested(node, "date"),
            normal_items: repeated(node, "normalItems"),
            important_items: repeated(node, "importantItems"),
            error_items: repeated(node, "errorItems"),
        }
    }
}

impl FromXml for ContentItem {
    fn from_xml(node: &XmlNode) -> Self {
        ContentItem {
            label: nested(node, "label"),
            content: repeated(node, "content"),
            link_target: node.text_of("linkTarget"),
        }
    }
}

impl FromXml for ContentLine {
    fn from_xml(node: &XmlNode) -> Self {
        ContentLine {
            content: node.text_of("content"),
            bold: node.bool_of("bold"),
            paragraph: node.bool_of("paragraph"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE_OPEN: &str =
        r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>"#;
    const ENVELOPE_CLOSE: &str = "</soap:Body></soap:Envelope>";

    fn wrap(body: &str) -> String {
        format!("{ENVELOPE_OPEN}{body}{ENVELOPE_CLOSE}")
    }

    #[test]
    fn login_reply() {
        let xml = wrap(
            r#"<ns2:getAuthResponse xmlns:ns2="http://dpd.com/common/service/types/LoginService/2.0">
                 <return>
                   <delisId>sandboxdpd</delisId>
                   <customerUid>sandboxdpd</customerUid>
                   <authToken>ABC123</authToken>
                   <depot>0998</depot>
                   <authTokenExpires>2026-10-19T03:00:00.000</authTokenExpires>
                 </return>
               </ns2:getAuthResponse>"#,
        );
        let outcome: CallOutcome<Login> = decode_reply(&xml, "getAuthResponse", "return").unwrap();
        let CallOutcome::Success(login) = outcome else {
            panic!("expected login, got {outcome:?}");
        };
        assert_eq!(login.auth_token(), Some("ABC123"));
        assert_eq!(login.depot(), Some("0998"));
        assert_eq!(login.auth_token_expires(), Some("2026-10-19T03:00:00.000"));
    }

    #[test]
    fn missing_child_is_no_payload() {
        let xml = wrap("<getAuthResponse/>");
        let outcome: CallOutcome<Login> = decode_reply(&xml, "getAuthResponse", "return").unwrap();
        assert_eq!(outcome, CallOutcome::NoPayload);
    }

    #[test]
    fn authentication_fault_in_detail() {
        let xml = wrap(
            r#"<soap:Fault>
                 <faultcode>soap:Server</faultcode>
                 <faultstring>Fault occured</faultstring>
                 <detail>
                   <ns2:authenticationFault xmlns:ns2="http://dpd.com/common/service/types/Authentication/2.0">
                     <errorCode>LOGIN_8</errorCode>
                     <errorMessage>The combination of user and password is invalid.</errorMessage>
                   </ns2:authenticationFault>
                 </detail>
               </soap:Fault>"#,
        );
        let outcome: CallOutcome<Login> = decode_reply(&xml, "getAuthResponse", "return").unwrap();
        match outcome {
            CallOutcome::AuthenticationFault(fault) => {
                assert_eq!(fault.error_code(), "LOGIN_8");
                assert!(fault.error_message().contains("invalid"));
            }
            other => panic!("expected fault, got {other:?}"),
        }
    }

    #[test]
    fn other_fault_is_error() {
        let xml = wrap(
            "<soap:Fault><faultcode>soap:Client</faultcode><faultstring>Unmarshalling Error</faultstring></soap:Fault>",
        );
        let err = decode_reply::<Login>(&xml, "getAuthResponse", "return").unwrap_err();
        match err {
            PaketError::Fault(fault) => {
                assert_eq!(fault.code, "soap:Client");
                assert_eq!(fault.message, "Unmarshalling Error");
            }
            other => panic!("expected SOAP fault, got {other:?}"),
        }
    }

    #[test]
    fn not_an_envelope() {
        assert!(matches!(
            decode_reply::<Login>("<html><body/></html>", "getAuthResponse", "return"),
            Err(PaketError::Xml(_))
        ));
        assert!(matches!(
            decode_reply::<Login>("<Envelope/>", "getAuthResponse", "return"),
            Err(PaketError::Xml(_))
        ));
    }

    #[test]
    fn store_orders_reply() {
        let xml = wrap(
            r#"<storeOrdersResponse><orderResult>
                 <output><format>PDF</format><content>JVBERi0=</content></output>
                 <shipmentResponses>
                   <identificationNumber>ref-1</identificationNumber>
                   <mpsId>MPS0998112233440001</mpsId>
                   <parcelInformation>
                     <parcelLabelNumber>09981122334455</parcelLabelNumber>
                   </parcelInformation>
                   <parcelInformation>
                     <parcelLabelNumber>09981122334456</parcelLabelNumber>
                   </parcelInformation>
                 </shipmentResponses>
                 <shipmentResponses>
                   <faults><faultCode>COMMON_7</faultCode><message>Invalid zip code</message></faults>
                 </shipmentResponses>
               </orderResult></storeOrdersResponse>"#,
        );
        let outcome: CallOutcome<StoreOrdersResponse> =
            decode_reply(&xml, "storeOrdersResponse", "orderResult").unwrap();
        let CallOutcome::Success(reply) = outcome else {
            panic!("expected reply");
        };
        assert_eq!(reply.output().and_then(OutputType::format_kind), Some(OutputFormatType::Pdf));
        assert_eq!(reply.shipment_responses().len(), 2);
        assert_eq!(reply.shipment_responses()[0].parcel_information().len(), 2);
        assert!(!reply.shipment_responses()[0].is_error());
        assert!(reply.shipment_responses()[1].is_error());
        assert!(reply.has_errors());
        assert_eq!(reply.shipment_responses()[1].faults()[0].fault_code(), Some("COMMON_7"));
    }

    #[test]
    fn tracking_reply() {
        let xml = wrap(
            r#"<getTrackingDataResponse><trackingresult>
                 <shipmentInfo>
                   <serviceDescription>
                     <label><content>Service</content><bold>true</bold></label>
                     <content><content>DPD Classic</content></content>
                   </serviceDescription>
                   <trackingProperty><key>PARCEL_LABEL_NUMBER</key><value>09981122334455</value></trackingProperty>
                 </shipmentInfo>
                 <statusInfo>
                   <status>ACCEPTED</status>
                   <statusHasBeenReached>true</statusHasBeenReached>
                   <isCurrentStatus>false</isCurrentStatus>
                 </statusInfo>
                 <statusInfo>
                   <status>DELIVERED</status>
                   <statusHasBeenReached>true</statusHasBeenReached>
                   <isCurrentStatus>true</isCurrentStatus>
                   <location><content>Aschaffenburg</content></location>
                 </statusInfo>
               </trackingresult></getTrackingDataResponse>"#,
        );
        let outcome: CallOutcome<TrackingResult> =
            decode_reply(&xml, "getTrackingDataResponse", "trackingresult").unwrap();
        let CallOutcome::Success(result) = outcome else {
            panic!("expected tracking result");
        };
        assert_eq!(result.status_info().len(), 2);
        assert!(result.is_delivered());
        let info = result.shipment_info().unwrap();
        assert_eq!(info.property("PARCEL_LABEL_NUMBER"), Some("09981122334455"));
        let service = info.service_description().unwrap();
        assert!(service.label().unwrap().bold());
        assert_eq!(service.text(), "DPD Classic");
        let current = result.current_status().unwrap();
        assert_eq!(current.location().and_then(ContentLine::content), Some("Aschaffenburg"));
    }
}
