//! Data model shared between server and clients

mod cart;
mod category;
mod product;
mod promo;
mod sale;
mod session;
mod settings;
mod staff;

pub use cart::CartLine;
pub use category::{Category, CategoryFilter};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use promo::{Promo, PromoCreate, PromoKind};
pub use sale::{PaymentMethod, Sale, SaleItem};
pub use session::{DefaultView, Role, SessionUser, StoredSession};
pub use settings::AdminConfig;
pub use staff::{Staff, StaffCreate, StaffUpdate, staff_pin_is_valid};
