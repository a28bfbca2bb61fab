//! Scripted admin channel with call counters.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::admin::{AdminChannel, MutationOutcome, TransportError};
use crate::model::{
    Customer, Price, Product, ProductCreateInput, ResourceId, Variant, VariantUpdateInput,
};

pub(crate) fn customer(id: &str, name: &str) -> Customer {
    Customer {
        id: ResourceId::new(format!("gid://shopify/Customer/{}", id)),
        display_name: name.to_string(),
        email: Some(format!("{}@example.com", id)),
    }
}

pub(crate) fn variant(id: &str, price: &str) -> Variant {
    Variant {
        id: ResourceId::new(format!("gid://shopify/ProductVariant/{}", id)),
        price: Price::parse(price).unwrap(),
        barcode: None,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub(crate) fn product(title: &str, variants: Vec<Variant>) -> Product {
    Product {
        id: ResourceId::new("gid://shopify/Product/1"),
        title: title.to_string(),
        handle: title.to_lowercase().replace(' ', "-"),
        status: "ACTIVE".to_string(),
        variants,
    }
}

type CreateReply = Result<MutationOutcome<Product>, TransportError>;
type UpdateReply = Result<MutationOutcome<Variant>, TransportError>;

#[derive(Default)]
pub(crate) struct FakeChannel {
    pub(crate) customers: Vec<Customer>,
    pub(crate) customer_calls: AtomicUsize,
    pub(crate) create_calls: AtomicUsize,
    pub(crate) update_calls: AtomicUsize,
    pub(crate) created_inputs: Mutex<Vec<ProductCreateInput>>,
    pub(crate) update_inputs: Mutex<Vec<VariantUpdateInput>>,
    create_replies: Mutex<VecDeque<CreateReply>>,
    update_replies: Mutex<VecDeque<UpdateReply>>,
    /// When set, a successful update echoes the input price onto this variant.
    echo_update: bool,
}

impl FakeChannel {
    pub(crate) fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            ..Self::default()
        }
    }

    /// Creates `product` and echoes back whatever update is sent.
    pub(crate) fn creating(product: Product) -> Self {
        let fake = Self {
            echo_update: true,
            ..Self::default()
        };
        fake.push_create(Ok(MutationOutcome::ok(product)));
        fake
    }

    pub(crate) fn push_create(&self, reply: CreateReply) {
        self.create_replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn push_update(&self, reply: UpdateReply) {
        self.update_replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

impl AdminChannel for FakeChannel {
    fn first_customers(&self, limit: usize) -> Result<Vec<Customer>, TransportError> {
        self.customer_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.customers.iter().take(limit).cloned().collect())
    }

    fn create_product(
        &self,
        input: &ProductCreateInput,
    ) -> Result<MutationOutcome<Product>, TransportError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created_inputs.lock().unwrap().push(input.clone());
        self.create_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(MutationOutcome::rejected(vec!["no reply scripted".into()])))
    }

    fn update_variant(
        &self,
        input: &VariantUpdateInput,
    ) -> Result<MutationOutcome<Variant>, TransportError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.update_inputs.lock().unwrap().push(input.clone());
        if let Some(reply) = self.update_replies.lock().unwrap().pop_front() {
            return reply;
        }
        if self.echo_update {
            return Ok(MutationOutcome::ok(Variant {
                id: input.id.clone(),
                price: input.price,
                barcode: None,
                created_at: "2024-01-01T00:00:00Z".to_string(),
            }));
        }
        Ok(MutationOutcome::rejected(vec!["no reply scripted".into()]))
    }
}
