//! Request envelopes.
//!
//! Every request entity writes its own element with [`WriteXml`]. Fields are
//! written in declaration order and unset optional fields are left out.
//! Child elements are unqualified; only the operation element and the
//! session header carry a namespace prefix.

use crate::core::international::pack_customs_papers;
use crate::core::services::pack_delivery_days;
use crate::core::*;

use super::xml_utils::XmlWriter;
use super::{NS_AUTHENTICATION, NS_SOAP_ENVELOPE, Service};

/// Write a request entity as the element `name`.
pub trait WriteXml {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError>;
}

impl<T: WriteXml> WriteXml for Option<&T> {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        match self {
            Some(inner) => inner.write_xml(name, w),
            None => Ok(()),
        }
    }
}

/// `getAuth` envelope for the login service.
pub fn login_envelope(credentials: &Credentials) -> Result<String, PaketError> {
    let service = Service::Login;
    let mut w = XmlWriter::new()?;
    start_envelope(&mut w, service)?;
    w.start_element("soapenv:Body")?;
    w.start_element(&operation_element("getAuth"))?;
    w.text_element("delisId", credentials.delis_id())?;
    w.text_element("password", credentials.password())?;
    w.text_element("messageLanguage", credentials.message_language())?;
    w.end_element(&operation_element("getAuth"))?;
    end_envelope(w)
}

/// `storeOrders` envelope for the shipment service.
pub fn store_orders_envelope(
    auth: &Authentication,
    request: &StoreOrders,
) -> Result<String, PaketError> {
    let service = Service::Shipment;
    let mut w = XmlWriter::new()?;
    start_envelope(&mut w, service)?;
    write_session_header(&mut w, auth)?;
    w.start_element("soapenv:Body")?;
    w.start_element(&operation_element("storeOrders"))?;
    request.print_options().write_xml("printOptions", &mut w)?;
    for order in request.orders() {
        order.write_xml("order", &mut w)?;
    }
    w.end_element(&operation_element("storeOrders"))?;
    end_envelope(w)
}

/// `getTrackingData` envelope for the parcel lifecycle service.
pub fn tracking_envelope(
    auth: &Authentication,
    request: &GetTrackingData,
) -> Result<String, PaketError> {
    let service = Service::ParcelLifeCycle;
    let mut w = XmlWriter::new()?;
    start_envelope(&mut w, service)?;
    write_session_header(&mut w, auth)?;
    w.start_element("soapenv:Body")?;
    w.start_element(&operation_element("getTrackingData"))?;
    w.text_element("parcelLabelNumber", request.parcel_label_number())?;
    w.end_element(&operation_element("getTrackingData"))?;
    end_envelope(w)
}

/// Operation elements live in the service namespace bound to `ns`.
fn operation_element(operation: &str) -> String {
    format!("ns:{operation}")
}

fn start_envelope(w: &mut XmlWriter, service: Service) -> Result<(), PaketError> {
    w.start_element_with_attrs(
        "soapenv:Envelope",
        &[
            ("xmlns:soapenv", NS_SOAP_ENVELOPE),
            ("xmlns:ns", service.namespace()),
            ("xmlns:auth", NS_AUTHENTICATION),
        ],
    )?;
    Ok(())
}

fn write_session_header(w: &mut XmlWriter, auth: &Authentication) -> Result<(), PaketError> {
    w.start_element("soapenv:Header")?;
    w.start_element("auth:authentication")?;
    w.text_element("delisId", auth.delis_id())?;
    w.text_element("authToken", auth.auth_token())?;
    w.text_element("messageLanguage", auth.message_language())?;
    w.end_element("auth:authentication")?;
    w.end_element("soapenv:Header")?;
    Ok(())
}

fn end_envelope(mut w: XmlWriter) -> Result<String, PaketError> {
    w.end_element("soapenv:Body")?;
    w.end_element("soapenv:Envelope")?;
    w.into_string()
}

fn write_address_fields(a: &Address, w: &mut XmlWriter) -> Result<(), PaketError> {
    w.optional_element("name1", a.name1())?;
    w.optional_element("name2", a.name2())?;
    w.optional_element("street", a.street())?;
    w.optional_element("houseNo", a.house_no())?;
    w.optional_element("state", a.state())?;
    w.optional_element("country", a.country())?;
    w.optional_element("zipCode", a.zip_code())?;
    w.optional_element("city", a.city())?;
    w.optional_element("gln", a.gln())?;
    w.optional_element("customerNumber", a.customer_number())?;
    w.optional_element("contact", a.contact())?;
    w.optional_element("phone", a.phone())?;
    w.optional_element("mobile", a.mobile())?;
    w.optional_element("fax", a.fax())?;
    w.optional_element("email", a.email())?;
    w.optional_element("comment", a.comment())?;
    w.optional_element("iaccount", a.iaccount())?;
    Ok(())
}

impl WriteXml for Address {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        write_address_fields(self, w)?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for AddressWithBusinessUnit {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        write_address_fields(self.address(), w)?;
        w.optional_element("businessUnit", self.business_unit())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for AddressWithType {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        write_address_fields(self.address(), w)?;
        w.optional_element("businessUnit", self.business_unit())?;
        w.optional_element("addressType", self.address_type())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for PrintOptions {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        for option in self.print_option() {
            option.write_xml("printOption", w)?;
        }
        w.optional_element("splitByParcel", self.split_by_parcel())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for PrintOption {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("outputFormat", self.output_format())?;
        w.optional_element("paperFormat", self.paper_format())?;
        self.printer().write_xml("printer", w)?;
        w.optional_element("startPosition", self.start_position())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for Printer {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("manufacturer", self.manufacturer())?;
        w.optional_element("model", self.model())?;
        w.optional_element("revision", self.revision())?;
        w.optional_element("offsetX", self.offset_x())?;
        w.optional_element("offsetY", self.offset_y())?;
        w.optional_element("connectionType", self.connection_type())?;
        w.optional_element("barcodeCapable2D", self.barcode_capable_2d())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for ShipmentServiceData {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        self.general_shipment_data()
            .write_xml("generalShipmentData", w)?;
        for parcel in self.parcels() {
            parcel.write_xml("parcels", w)?;
        }
        self.product_and_service_data()
            .write_xml("productAndServiceData", w)?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for GeneralShipmentData {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("mpsId", self.mps_id())?;
        w.optional_element("cUser", self.c_user())?;
        w.optional_element("mpsCustomerReferenceNumber1", self.mps_customer_reference_number1())?;
        w.optional_element("mpsCustomerReferenceNumber2", self.mps_customer_reference_number2())?;
        w.optional_element("mpsCustomerReferenceNumber3", self.mps_customer_reference_number3())?;
        w.optional_element("mpsCustomerReferenceNumber4", self.mps_customer_reference_number4())?;
        w.optional_element("identificationNumber", self.identification_number())?;
        w.optional_element("sendingDepot", self.sending_depot())?;
        w.optional_element("product", self.product())?;
        w.value_element("mpsCompleteDelivery", self.mps_complete_delivery())?;
        w.value_element("mpsCompleteDeliveryLabel", self.mps_complete_delivery_label())?;
        w.optional_element("mpsVolume", self.mps_volume())?;
        w.optional_element("mpsWeight", self.mps_weight())?;
        w.optional_element("mpsExpectedSendingDate", self.mps_expected_sending_date())?;
        w.optional_element("mpsExpectedSendingTime", self.mps_expected_sending_time())?;
        self.sender().write_xml("sender", w)?;
        self.recipient().write_xml("recipient", w)?;
        self.return_address().write_xml("returnAddress", w)?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for Parcel {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("parcelLabelNumber", self.parcel_label_number())?;
        w.optional_element("customerReferenceNumber1", self.customer_reference_number1())?;
        w.optional_element("customerReferenceNumber2", self.customer_reference_number2())?;
        w.optional_element("customerReferenceNumber3", self.customer_reference_number3())?;
        w.optional_element("customerReferenceNumber4", self.customer_reference_number4())?;
        w.optional_element("swap", self.swap())?;
        w.optional_element("volume", self.volume())?;
        w.optional_element("weight", self.weight())?;
        w.value_element("hazardousLimitedQuantities", self.hazardous_limited_quantities())?;
        self.higher_insurance().write_xml("higherInsurance", w)?;
        w.optional_element("content", self.content())?;
        w.optional_element("addService", self.add_service())?;
        w.value_element("messageNumber", self.message_number())?;
        w.optional_element("function", self.function())?;
        w.optional_element("parameter", self.parameter())?;
        for hazardous in self.hazardous() {
            hazardous.write_xml("hazardous", w)?;
        }
        w.value_element("printInfo1OnParcelLabel", self.print_info1_on_parcel_label())?;
        w.optional_element("info1", self.info1())?;
        w.optional_element("info2", self.info2())?;
        w.value_element("returns", self.returns())?;
        w.optional_element("parcelClass", self.parcel_class())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for HigherInsurance {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.value_element("amount", self.amount())?;
        w.text_element("currency", self.currency())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for Hazardous {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("identificationUnNo", self.identification_un_no())?;
        w.optional_element("identificationClass", self.identification_class())?;
        w.optional_element("classificationCode", self.classification_code())?;
        w.optional_element("packingGroup", self.packing_group())?;
        w.optional_element("packingCode", self.packing_code())?;
        w.optional_element("description", self.description())?;
        w.optional_element("subsidiaryRisk", self.subsidiary_risk())?;
        w.optional_element("tunnelRestrictionCode", self.tunnel_restriction_code())?;
        w.optional_element("hazardousWeight", self.hazardous_weight())?;
        w.optional_element("netWeight", self.net_weight())?;
        w.optional_element("factor", self.factor())?;
        w.optional_element("notOtherwiseSpecified", self.not_otherwise_specified())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for ProductAndServiceData {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("orderType", self.order_type())?;
        w.value_element("saturdayDelivery", self.saturday_delivery())?;
        w.value_element("exWorksDelivery", self.ex_works_delivery())?;
        w.optional_element("guarantee", self.guarantee())?;
        w.optional_element("tyres", self.tyres())?;
        w.optional_element("food", self.food())?;
        self.personal_delivery().write_xml("personalDelivery", w)?;
        self.pickup().write_xml("pickup", w)?;
        self.parcel_shop_delivery().write_xml("parcelShopDelivery", w)?;
        self.predict().write_xml("predict", w)?;
        self.personal_delivery_notification()
            .write_xml("personalDeliveryNotification", w)?;
        for notification in self.proactive_notification() {
            notification.write_xml("proactiveNotification", w)?;
        }
        self.delivery().write_xml("delivery", w)?;
        self.invoice_address().write_xml("invoiceAddress", w)?;
        w.optional_element("countrySpecificService", self.country_specific_service())?;
        self.international().write_xml("international", w)?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for PersonalDelivery {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("type", self.delivery_type())?;
        w.optional_element("floor", self.floor())?;
        w.optional_element("building", self.building())?;
        w.optional_element("department", self.department())?;
        w.optional_element("name", self.name())?;
        w.optional_element("phone", self.phone())?;
        w.optional_element("personId", self.person_id())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for Pickup {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("tour", self.tour())?;
        w.optional_element("quantity", self.quantity())?;
        w.optional_element("date", self.date())?;
        w.optional_element("fromTime1", self.from_time1())?;
        w.optional_element("toTime1", self.to_time1())?;
        w.optional_element("fromTime2", self.from_time2())?;
        w.optional_element("toTime2", self.to_time2())?;
        w.optional_element("extraPickup", self.extra_pickup())?;
        w.optional_element("boxId", self.box_id())?;
        w.optional_element("boxTan", self.box_tan())?;
        self.address().write_xml("address", w)?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for ParcelShopDelivery {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("parcelShopId", self.parcel_shop_id())?;
        w.optional_element("parcelShopPudoId", self.parcel_shop_pudo_id())?;
        self.notification().write_xml("parcelShopNotification", w)?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for Delivery {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        if !self.day().is_empty() {
            w.text_element("day", &pack_delivery_days(self.day()))?;
        }
        w.optional_element("dateFrom", self.date_from())?;
        w.optional_element("dateTo", self.date_to())?;
        w.optional_element("timeFrom", self.time_from())?;
        w.optional_element("timeTo", self.time_to())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for Notification {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("channel", self.channel())?;
        w.optional_element("value", self.value())?;
        w.optional_element("language", self.language())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for ProactiveNotification {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("channel", self.channel())?;
        w.optional_element("value", self.value())?;
        w.optional_element("language", self.language())?;
        w.optional_element("rule", self.rule())?;
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for International {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("parcelType", self.parcel_type())?;
        w.optional_element("customsAmount", self.customs_amount())?;
        w.optional_element("customsCurrency", self.customs_currency())?;
        w.optional_element("customsAmountExport", self.customs_amount_export())?;
        w.optional_element("customsCurrencyExport", self.customs_currency_export())?;
        w.optional_element("customsTerms", self.customs_terms())?;
        if !self.customs_paper().is_empty() {
            w.text_element("customsPaper", &pack_customs_papers(self.customs_paper()))?;
        }
        w.optional_element("customsEnclosure", self.customs_enclosure())?;
        w.optional_element("customsInvoice", self.customs_invoice())?;
        w.optional_element("customsInvoiceDate", self.customs_invoice_date())?;
        w.optional_element("customsOrigin", self.customs_origin())?;
        w.optional_element("customsOrder", self.customs_order())?;
        w.optional_element("linehaul", self.linehaul())?;
        w.optional_element("shipMrn", self.ship_mrn())?;
        w.optional_element("collectiveCustomsClearance", self.collective_customs_clearance())?;
        w.optional_element("invoicePosition", self.invoice_position())?;
        w.optional_element("comment1", self.comment1())?;
        w.optional_element("comment2", self.comment2())?;
        w.optional_element("numberOfArticle", self.number_of_article())?;
        w.optional_element("countryRegistrationNumber", self.country_registration_number())?;
        w.optional_element(
            "commercialInvoiceConsigneeVatNumber",
            self.commercial_invoice_consignee_vat_number(),
        )?;
        self.commercial_invoice_consignee()
            .write_xml("commercialInvoiceConsignee", w)?;
        w.optional_element(
            "commercialInvoiceConsignorVatNumber",
            self.commercial_invoice_consignor_vat_number(),
        )?;
        self.commercial_invoice_consignor()
            .write_xml("commercialInvoiceConsignor", w)?;
        for line in self.additional_invoice_lines() {
            line.write_xml("additionalInvoiceLines", w)?;
        }
        w.end_element(name)?;
        Ok(())
    }
}

impl WriteXml for AdditionalInvoiceLine {
    fn write_xml(&self, name: &str, w: &mut XmlWriter) -> Result<(), PaketError> {
        w.start_element(name)?;
        w.optional_element("customsInvoicePosition", self.customs_invoice_position())?;
        w.optional_element("quantityItems", self.quantity_items())?;
        w.optional_element("customsContent", self.customs_content())?;
        w.optional_element("customsTarif", self.customs_tarif())?;
        w.optional_element("customsAmountLine", self.customs_amount_line())?;
        w.optional_element("customsOrigin", self.customs_origin())?;
        w.optional_element("customsNetWeight", self.customs_net_weight())?;
        w.optional_element("customsGrossWeight", self.customs_gross_weight())?;
        w.optional_element("productFabricComposition", self.product_fabric_composition())?;
        w.optional_element("productCode", self.product_code())?;
        w.optional_element("productShortDescription", self.product_short_description())?;
        w.end_element(name)?;
        Ok(())
    }
}
