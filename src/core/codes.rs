//! Closed code lists of the shipment and tracking services.
//!
//! Each list is a plain enum with its wire code, the full allowed list
//! (`ALL`) and a `FromStr` impl that rejects unknown codes with a
//! [`ValidationError`].

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

macro_rules! code_list {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every allowed value, in the carrier's documented order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Code as sent on the wire.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Parse from the wire code.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Wire codes of every allowed value.
            pub fn allowed_codes() -> Vec<&'static str> {
                Self::ALL.iter().map(Self::code).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                Self::from_code(code)
                    .ok_or_else(|| ValidationError::not_allowed($field, code, &Self::allowed_codes()))
            }
        }
    };
}

code_list! {
    /// Address classification of sender, recipient and return address.
    AddressType, "addressType" {
        /// PRV: private recipient.
        Private => "PRV",
        /// COM: commercial recipient.
        Commercial => "COM",
    }
}

code_list! {
    /// Additional delivery service of a parcel.
    AddService, "addService" {
        DeliveryInformation => "1",
        DocumentsReturn => "2",
        WrittenPermissions => "3",
        DepartmentDelivery => "4",
        OnlinePermission => "5",
        ParcelBox => "6",
        InformationAtIndoorScanning => "7",
        LockingOutForDelivery => "8",
    }
}

code_list! {
    /// Special handling function of a parcel.
    ParcelFunction, "function" {
        /// Delivery to a third party with notification of delivery.
        LockDzb => "LOCKDZB",
        /// Written permission to deposit goods.
        LockAsg => "LOCKASG",
        /// Delivery with non-recurring authority.
        LockEvm => "LOCKEVM",
        /// Parcel shop.
        LockShop => "LOCKSHOP",
        /// Appointment.
        LockTv => "LOCKTV",
        /// Delivery to mail or parcel box, without signature.
        LockZbk => "LOCKZBK",
    }
}

code_list! {
    /// ADR packaging codes for hazardous goods.
    PackingCode, "packingCode" {
        ThinSheet => "0A",
        ThinSheetFixedHead => "0A1",
        ThinSheetRemovableHead => "0A2",
        SteelBarrel => "1A",
        SteelBarrelFixedHead => "1A1",
        SteelBarrelRemovableHead => "1A2",
        AluminiumBarrel => "1B",
        AluminiumBarrelFixedHead => "1B1",
        AluminiumBarrelRemovableHead => "1B2",
        PlasticsBarrel => "1H",
        PlasticsBarrelFixedHead => "1H1",
        PlasticsBarrelRemovableHead => "1H2",
        SteelCanister => "3A",
        SteelCanisterFixedHead => "3A1",
        SteelCanisterRemovableHead => "3A2",
        AluminiumCanister => "3B",
        AluminiumCanisterFixedHead => "3B1",
        AluminiumCanisterRemovableHead => "3B2",
        PlasticsCanister => "3H",
        PlasticsCanisterFixedHead => "3H1",
        PlasticsCanisterRemovableHead => "3H2",
        SteelCrate => "4A",
        AluminiumCrate => "4B",
        PlywoodCrate => "4D",
        CardboardCrate => "4G",
        PlasticsCrate => "4H",
        PlasticsCrateExpanded => "4H1",
        PlasticsCrateSolid => "4H2",
        PlasticsBag => "5H",
        PaperBag => "5M",
        Combination => "6H",
    }
}

code_list! {
    /// ADR tunnel restriction category.
    TunnelRestrictionCode, "tunnelRestrictionCode" {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
        E => "E",
    }
}

code_list! {
    /// Incoterm-like customs terms for international shipments.
    CustomsTerms, "customsTerms" {
        /// 01: DAP, cleared.
        DapCleared => "01",
        /// 02: DDP, delivered duty paid (excl. duties, taxes and VAT).
        DdpExcludeTaxes => "02",
        /// 03: DDP, delivered duty paid (incl. duties, taxes and VAT).
        DdpIncludeTaxes => "03",
        /// 05: ex works.
        ExWorks => "05",
        /// 06: DAP.
        Dap => "06",
        /// 07: DAP, NOT cleared.
        DapEnhanced => "07",
    }
}

code_list! {
    /// Accompanying customs document; several may be packed into one field.
    CustomsPaper, "customsPaper" {
        CommercialInvoice => "A",
        ProformaInvoice => "B",
        ExportDeclaration => "C",
        Eur1 => "D",
        Eur2 => "E",
        Atr => "F",
        DeliveryNote => "G",
        ThirdPartyBilling => "H",
        T1Document => "I",
    }
}

code_list! {
    /// Line haul of an international shipment.
    Linehaul, "linehaul" {
        Air => "AI",
        Road => "RO",
    }
}

code_list! {
    /// Carrier product.
    Product, "product" {
        /// DPD CLASSIC.
        Classic => "CL",
        /// DPD 8:30.
        Express830 => "E830",
        /// DPD 10:00.
        Express10 => "E10",
        /// DPD 12:00.
        Express12 => "E12",
        /// DPD 18:00.
        Express18 => "E18",
        /// DPD EXPRESS.
        Express => "IE2",
        /// DPD International Mail.
        InternationalMail => "MAIL",
        /// DPD MAX.
        Max => "MAX",
        /// DPD PARCELLetter.
        ParcelLetter => "PL",
        /// DPD Priority.
        Priority => "PM4",
    }
}

code_list! {
    /// Shipment order type. Documents which service sub-records apply;
    /// the applicability is not enforced.
    OrderType, "orderType" {
        Consignment => "consignment",
        CollectionRequestOrder => "collection request order",
        PickupInformation => "pickup information",
    }
}

code_list! {
    /// Extra pickup service.
    ExtraPickup, "extraPickup" {
        WithoutExpressService => "1",
        WithExpressService => "2",
    }
}

code_list! {
    /// Personal delivery variant.
    PersonalDeliveryType, "type" {
        DepartmentDelivery => "1",
        WithPersonalIdentification => "2",
        WithoutPersonalIdentification => "3",
        WithPersonalIdentificationAtDropPoint => "4",
        WithPersonalIdentificationAtDropPointPlusIdCheck => "5",
    }
}

code_list! {
    /// Delivery weekday.
    DeliveryDay, "day" {
        Sunday => "0",
        Monday => "1",
        Tuesday => "2",
        Wednesday => "3",
        Thursday => "4",
        Friday => "5",
        Saturday => "6",
    }
}

code_list! {
    /// Channel of a predict or personal delivery notification.
    NotificationChannel, "channel" {
        Email => "1",
        Telephone => "2",
        Sms => "3",
    }
}

code_list! {
    /// Channel of a proactive notification; extends [`NotificationChannel`].
    ProactiveChannel, "channel" {
        Email => "1",
        Telephone => "2",
        Sms => "3",
        Fax => "6",
        Postcard => "7",
    }
}

code_list! {
    /// Parcel event that triggers a proactive notification.
    ProactiveRule, "rule" {
        PickUp => "1",
        NonDelivery => "2",
        Delivery => "4",
        Inbound => "8",
        OutForDelivery => "16",
    }
}

impl ProactiveRule {
    /// Bit of this event in the packed `rule` value.
    pub fn bit(&self) -> u8 {
        match self {
            Self::PickUp => 1,
            Self::NonDelivery => 2,
            Self::Delivery => 4,
            Self::Inbound => 8,
            Self::OutForDelivery => 16,
        }
    }
}

impl From<NotificationChannel> for ProactiveChannel {
    fn from(channel: NotificationChannel) -> Self {
        match channel {
            NotificationChannel::Email => Self::Email,
            NotificationChannel::Telephone => Self::Telephone,
            NotificationChannel::Sms => Self::Sms,
        }
    }
}

code_list! {
    /// Label paper format.
    PaperFormat, "paperFormat" {
        A4 => "A4",
        A6 => "A6",
        A7 => "A7",
    }
}

code_list! {
    /// Label printer connection.
    ConnectionType, "connectionType" {
        Serial => "SERIAL",
        Parallel => "PARALLEL",
    }
}

code_list! {
    /// Position of the first label on an A4 sheet.
    StartPosition, "startPosition" {
        UpperLeft => "UPPER_LEFT",
        UpperRight => "UPPER_RIGHT",
        LowerLeft => "LOWER_LEFT",
        LowerRight => "LOWER_RIGHT",
    }
}

code_list! {
    /// Format of the returned label payload.
    OutputFormatType, "outputFormat" {
        Pdf => "PDF",
        Zpl => "ZPL",
        Dpl => "DPL",
        Pdl => "PDL",
        BarcodeImage => "BARCODE_IMAGE",
        MultipageImage => "MULTIPAGE_IMAGE",
    }
}

code_list! {
    /// Parcel life-cycle status reported by tracking.
    TrackingStatus, "status" {
        Shipment => "SHIPMENT",
        Accepted => "ACCEPTED",
        AtSendingDepot => "AT_SENDING_DEPOT",
        OnTheRoad => "ON_THE_ROAD",
        AtDeliveryDepot => "AT_DELIVERY_DEPOT",
        Delivered => "DELIVERED",
    }
}
