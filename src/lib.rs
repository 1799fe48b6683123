//! # paket
//!
//! Typed client for DPD's SOAP web services: authentication (LoginService
//! 2.0), shipment creation with label printing (ShipmentService 4.4) and
//! parcel tracking (ParcelLifeCycleService 2.0).
//!
//! Every request entity is assembled through a builder whose setters check
//! the carrier's field constraints (lengths, numeric ceilings, formats,
//! closed code lists) on assignment, so a malformed request never leaves the
//! process.
//!
//! ## Quick Start
//!
//! ```rust
//! use paket::core::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let recipient = AddressWithType::builder(
//!     Address::builder()
//!         .name1("Kunde AG")?
//!         .street("Marienplatz")?
//!         .house_no("1")?
//!         .zip_code("80331")?
//!         .city("München")?
//!         .country("DE")?
//!         .build(),
//! )
//! .address_type(AddressType::Commercial)
//! .build();
//!
//! let order = ShipmentServiceData::builder()
//!     .general_shipment_data(
//!         GeneralShipmentData::builder()
//!             .sending_depot("0163")?
//!             .product(Product::Classic)
//!             .recipient(recipient)
//!             .build(),
//!     )
//!     .add_parcel(Parcel::builder().weight(450)?.build())?
//!     .product_and_service_data(
//!         ProductAndServiceData::builder()
//!             .order_type(OrderType::Consignment)
//!             .build(),
//!     )
//!     .build();
//!
//! let request = StoreOrders::builder()
//!     .print_options(
//!         PrintOptions::builder()
//!             .add_print_option(
//!                 PrintOption::builder()
//!                     .output_format(OutputFormatType::Pdf)
//!                     .paper_format(PaperFormat::A6)
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .add_order(order)?
//!     .build();
//!
//! assert_eq!(request.orders().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Request/response entities, field validation, code lists |
//! | `soap` (default) | SOAP envelope codec, endpoint configuration and the [`soap::Api`] dispatcher |
//! | `client` | Blocking HTTP transport (`reqwest`) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "soap")]
pub mod soap;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
