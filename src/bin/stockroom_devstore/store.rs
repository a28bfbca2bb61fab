use stockroom::model::Price;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Debug)]
pub(super) struct CustomerRec {
    pub(super) id: u64,
    pub(super) display_name: String,
    pub(super) email: String,
}

#[derive(Clone, Debug)]
pub(super) struct VariantRec {
    pub(super) id: u64,
    pub(super) price: Price,
    pub(super) barcode: Option<String>,
    pub(super) created_at: String,
}

#[derive(Clone, Debug)]
pub(super) struct ProductRec {
    pub(super) id: u64,
    pub(super) title: String,
    pub(super) handle: String,
    pub(super) status: String,
    pub(super) image: Option<String>,
    pub(super) variants: Vec<VariantRec>,
}

#[derive(Clone, Debug)]
pub(super) struct CollectionRec {
    pub(super) id: u64,
    pub(super) title: String,
    pub(super) handle: String,
    pub(super) image: Option<String>,
}

#[derive(Debug, Default)]
pub(super) struct Store {
    pub(super) customers: Vec<CustomerRec>,
    pub(super) products: Vec<ProductRec>,
    pub(super) collections: Vec<CollectionRec>,
    next_id: u64,
}

const SEED_CUSTOMERS: [(&str, &str); 12] = [
    ("Alex Rivera", "alex.rivera@example.com"),
    ("Priya Shah", "priya.shah@example.com"),
    ("Jonas Berg", "jonas.berg@example.com"),
    ("Alex Rivera", "alex.r@example.net"),
    ("Mei Tanaka", "mei.tanaka@example.com"),
    ("Omar Haddad", "omar.haddad@example.com"),
    ("Lucia Romano", "lucia.romano@example.com"),
    ("Kwame Mensah", "kwame.mensah@example.com"),
    ("Sofia Novak", "sofia.novak@example.com"),
    ("Daniel Kim", "daniel.kim@example.com"),
    ("Hannah Weiss", "hannah.weiss@example.com"),
    ("Tomás Ortega", "tomas.ortega@example.com"),
];

impl Store {
    pub(super) fn seeded() -> Self {
        let mut store = Store {
            next_id: 1000,
            ..Store::default()
        };
        for (i, (name, email)) in SEED_CUSTOMERS.iter().enumerate() {
            store.customers.push(CustomerRec {
                id: 1 + i as u64,
                display_name: name.to_string(),
                email: email.to_string(),
            });
        }
        for (title, cents) in [
            ("The Complete Snowboard", 69995),
            ("The Minimal Snowboard", 88595),
            ("Snowboard Wax", 2495),
        ] {
            let id = store.alloc_id();
            let variant = VariantRec {
                id: store.alloc_id(),
                price: Price::from_cents(cents),
                barcode: None,
                created_at: now_ts(),
            };
            store.products.push(ProductRec {
                id,
                title: title.to_string(),
                handle: handleize(title),
                status: "ACTIVE".to_string(),
                image: Some(format!("https://cdn.example.com/{}.png", handleize(title))),
                variants: vec![variant],
            });
        }
        for title in ["Winter Collection", "Accessories"] {
            let id = store.alloc_id();
            store.collections.push(CollectionRec {
                id,
                title: title.to_string(),
                handle: handleize(title),
                image: None,
            });
        }
        store
    }

    pub(super) fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Creates a product; `with_default_variant` mirrors what a real store always does.
    pub(super) fn create_product(&mut self, title: &str, with_default_variant: bool) -> ProductRec {
        let id = self.alloc_id();
        let mut variants = Vec::new();
        if with_default_variant {
            variants.push(VariantRec {
                id: self.alloc_id(),
                price: Price::from_cents(0),
                barcode: None,
                created_at: now_ts(),
            });
        }
        let rec = ProductRec {
            id,
            title: title.to_string(),
            handle: self.unique_handle(&handleize(title)),
            status: "ACTIVE".to_string(),
            image: None,
            variants,
        };
        self.products.push(rec.clone());
        rec
    }

    pub(super) fn update_variant_price(&mut self, variant_id: u64, price: Price) -> Option<VariantRec> {
        let variant = self
            .products
            .iter_mut()
            .flat_map(|p| p.variants.iter_mut())
            .find(|v| v.id == variant_id)?;
        variant.price = price;
        Some(variant.clone())
    }

    fn unique_handle(&self, base: &str) -> String {
        let taken = |h: &str| self.products.iter().any(|p| p.handle == h);
        if !taken(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{}-{}", base, n))
            .find(|h| !taken(h))
            .unwrap_or_else(|| base.to_string())
    }
}

pub(super) fn handleize(title: &str) -> String {
    let mut out = String::new();
    for ch in title.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

pub(super) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}
