//! Full flow against a real work dir: startup seeding, login, checkout,
//! snapshot publication.

use shared::models::{
    Category, CategoryFilter, DefaultView, PaymentMethod, ProductCreate, PromoCreate, PromoKind,
    Role, StaffCreate,
};
use warung_server::checkout::{self, CheckoutLine, CheckoutRequest};
use warung_server::session::{PinCredential, gate};
use warung_server::store::Collection;
use warung_server::store::repository::{
    ProductRepository, PromoRepository, SaleRepository, SettingsRepository, StaffRepository,
};
use warung_server::{Config, ErrorCode, ServerState};

fn test_state(dir: &tempfile::TempDir) -> ServerState {
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    ServerState::initialize(&config)
}

#[tokio::test]
async fn first_startup_seeds_hashed_admin_pin() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    let admin = SettingsRepository::new(state.store.clone())
        .admin_config()
        .expect("admin config seeded");
    assert!(admin.pin.starts_with("$argon2"));
    assert!(PinCredential::verify(&admin.pin, "1234").unwrap());
}

#[tokio::test]
async fn login_roles_land_on_their_views() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    let settings = SettingsRepository::new(state.store.clone());
    let admin = settings.admin_config().unwrap();

    let outcome = gate::resolve_login(Role::Admin, None, "1234", &admin).unwrap();
    assert_eq!(outcome.default_view, DefaultView::Dashboard);
    state.sessions.save(outcome.session).unwrap();
    assert_eq!(state.sessions.current().unwrap().role, Role::Admin);

    let staff = StaffRepository::new(state.store.clone())
        .create(StaffCreate {
            name: "Budi".into(),
            position: "Kasir".into(),
            pin: "5678".into(),
        })
        .unwrap();
    let outcome = gate::resolve_login(Role::Staff, Some(&staff), "5678", &admin).unwrap();
    assert_eq!(outcome.default_view, DefaultView::Pos);

    let err = gate::resolve_login(Role::Admin, None, "0000", &admin).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidPin);
}

#[tokio::test]
async fn checkout_commits_sale_and_stock_in_one_version_step() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    let products = ProductRepository::new(state.store.clone());

    let bakso = products
        .create(ProductCreate {
            name: "Bakso Urat".into(),
            price: 15000,
            stock: 10,
            category: Category::Bakso,
            image: None,
        })
        .unwrap();
    let teh = products
        .create(ProductCreate {
            name: "Es Teh".into(),
            price: 5000,
            stock: 20,
            category: Category::Minuman,
            image: None,
        })
        .unwrap();

    PromoRepository::new(state.store.clone())
        .create(PromoCreate {
            code: "HEMAT10".into(),
            kind: PromoKind::Percentage,
            value: 10,
        })
        .unwrap();

    let products_rx = state.store.subscribe(Collection::Products);
    let version_before = products_rx.borrow().version;

    let sale = checkout::perform(
        &state.store,
        "Budi",
        CheckoutRequest {
            lines: vec![
                CheckoutLine {
                    product_id: bakso.id.clone().unwrap(),
                    quantity: 2,
                },
                CheckoutLine {
                    product_id: teh.id.clone().unwrap(),
                    quantity: 1,
                },
            ],
            payment_method: PaymentMethod::Tunai,
            promo_code: Some("hemat10".into()),
        },
    )
    .unwrap();

    // 35000 - 10% = 31500
    assert_eq!(sale.subtotal, 35000);
    assert_eq!(sale.discount, 3500);
    assert_eq!(sale.total, 31500);

    // One publication for all stock writes of the batch
    assert_eq!(products_rx.borrow().version, version_before + 1);
    assert_eq!(products.find_by_id(&bakso.id.unwrap()).unwrap().stock, 8);
    assert_eq!(products.find_by_id(&teh.id.unwrap()).unwrap().stock, 19);

    let sales = SaleRepository::new(state.store.clone()).find_all();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].items.len(), 2);
    assert_eq!(sales[0].promo_code.as_deref(), Some("HEMAT10"));
}

#[tokio::test]
async fn failed_checkout_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    let products = ProductRepository::new(state.store.clone());

    let scarce = products
        .create(ProductCreate {
            name: "Bakso Telur".into(),
            price: 18000,
            stock: 1,
            category: Category::Bakso,
            image: None,
        })
        .unwrap();

    let version_before = state.store.version(Collection::Products);

    let err = checkout::perform(
        &state.store,
        "Budi",
        CheckoutRequest {
            lines: vec![CheckoutLine {
                product_id: scarce.id.clone().unwrap(),
                quantity: 5,
            }],
            payment_method: PaymentMethod::Qris,
            promo_code: None,
        },
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::InsufficientStock);
    assert_eq!(state.store.version(Collection::Products), version_before);
    assert_eq!(products.find_by_id(&scarce.id.unwrap()).unwrap().stock, 1);
    assert!(SaleRepository::new(state.store.clone()).find_all().is_empty());
}

#[tokio::test]
async fn filtered_list_reflects_writes_between_queries() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    let products = ProductRepository::new(state.store.clone());

    products
        .create(ProductCreate {
            name: "Bakso Urat".into(),
            price: 15000,
            stock: 10,
            category: Category::Bakso,
            image: None,
        })
        .unwrap();

    // Warm the cache at the current version
    let (v1, docs1) = products.snapshot_all();
    let first = state.catalog.filter(v1, &docs1, "bakso", CategoryFilter::Semua);
    assert_eq!(first.len(), 1);

    products
        .create(ProductCreate {
            name: "Bakso Telur".into(),
            price: 18000,
            stock: 5,
            category: Category::Bakso,
            image: None,
        })
        .unwrap();

    // The write bumped the version, and the same snapshot read carries
    // both version and docs, so the cached single-item list cannot be
    // served for the fresh version
    let (v2, docs2) = products.snapshot_all();
    assert_eq!(v2, v1 + 1);
    let served = state.catalog.filter(v2, &docs2, "bakso", CategoryFilter::Semua);
    assert_eq!(served.len(), 2);
}

#[tokio::test]
async fn store_and_session_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let product_id;
    {
        let state = test_state(&dir);
        product_id = ProductRepository::new(state.store.clone())
            .create(ProductCreate {
                name: "Mie Ayam".into(),
                price: 12000,
                stock: 7,
                category: Category::Mie,
                image: None,
            })
            .unwrap()
            .id
            .unwrap();

        let admin = SettingsRepository::new(state.store.clone())
            .admin_config()
            .unwrap();
        let outcome = gate::resolve_login(Role::Admin, None, "1234", &admin).unwrap();
        state.sessions.save(outcome.session).unwrap();
    }

    let state = test_state(&dir);
    let product = ProductRepository::new(state.store.clone())
        .find_by_id(&product_id)
        .expect("product survives restart");
    assert_eq!(product.stock, 7);
    assert_eq!(state.sessions.current().unwrap().role, Role::Admin);
}
