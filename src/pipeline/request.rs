use anyhow::Result;
use serde::Serialize;

use crate::model::{Price, ProductCreateInput};

const DEMO_COLORS: [&str; 4] = ["Red", "Orange", "Yellow", "Green"];

/// Explicit input for one run. Nothing is read from selection state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProvisionRequest {
    pub title: String,
    pub price: Price,
}

impl ProvisionRequest {
    pub fn new(title: impl Into<String>, price: Price) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }

    /// `"<Color> Snowboard"` with a price in [0, 100).
    pub fn demo() -> Result<Self> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
        let color = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize % DEMO_COLORS.len();
        let cents = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]) as u64 % 10_000;
        Ok(Self {
            title: format!("{} Snowboard", DEMO_COLORS[color]),
            price: Price::from_cents(cents),
        })
    }

    pub(super) fn product_input(&self) -> ProductCreateInput {
        ProductCreateInput {
            title: self.title.clone(),
        }
    }
}

/// Fills whatever the caller left out with demo values.
pub fn request_or_demo(title: Option<String>, price: Option<Price>) -> Result<ProvisionRequest> {
    let demo = ProvisionRequest::demo()?;
    Ok(ProvisionRequest {
        title: title.unwrap_or(demo.title),
        price: price.unwrap_or(demo.price),
    })
}
