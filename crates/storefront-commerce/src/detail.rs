//! Product page state: quantity, wishlist, options, tabs, gallery and sharing.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::notifications::NotificationKind;
use crate::search::url_encode;

/// Bounded quantity stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySelector {
    value: u32,
    min: u32,
    max: u32,
}

impl QuantitySelector {
    /// Starts at `min`. A `max` below `min` is raised to `min`.
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            value: min,
            min,
            max: max.max(min),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Step up, stopping at `max`.
    pub fn increase(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    /// Step down, stopping at `min`.
    pub fn decrease(&mut self) {
        if self.value > self.min {
            self.value -= 1;
        }
    }

    /// Set a typed value, clamped into range.
    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// Tabs under the product gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    #[default]
    Description,
    Specifications,
    Reviews,
}

impl DetailTab {
    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Description => "Descrição",
            DetailTab::Specifications => "Especificações",
            DetailTab::Reviews => "Avaliações",
        }
    }
}

/// Where a share button sends the product link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    WhatsApp,
    Facebook,
    Twitter,
    CopyLink,
}

/// Short feedback message shown after a page action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNotice {
    pub message: String,
    pub kind: NotificationKind,
}

impl PageNotice {
    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Result of a share button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open this URL in a new window.
    Open(String),
    /// Put the text on the clipboard and show the notice.
    Copy { text: String, notice: PageNotice },
}

/// Result of adding to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAddition {
    pub quantity: u32,
    pub cart_count: u32,
    pub notice: PageNotice,
}

/// State of one product page.
#[derive(Debug, Clone)]
pub struct ProductPage {
    product: Product,
    quantity: QuantitySelector,
    wishlisted: bool,
    color: Option<String>,
    size: Option<String>,
    tab: DetailTab,
    main_image: Option<String>,
}

impl ProductPage {
    pub fn new(product: Product) -> Self {
        let main_image = product.image.clone();
        Self {
            product,
            quantity: QuantitySelector::default(),
            wishlisted: false,
            color: None,
            size: None,
            tab: DetailTab::default(),
            main_image,
        }
    }

    pub fn with_quantity(mut self, quantity: QuantitySelector) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> &QuantitySelector {
        &self.quantity
    }

    pub fn quantity_mut(&mut self) -> &mut QuantitySelector {
        &mut self.quantity
    }

    pub fn is_wishlisted(&self) -> bool {
        self.wishlisted
    }

    /// Flip the wishlist heart and return the notice to show.
    pub fn toggle_wishlist(&mut self) -> PageNotice {
        self.wishlisted = !self.wishlisted;
        if self.wishlisted {
            PageNotice::new("Produto adicionado aos favoritos!", NotificationKind::Success)
        } else {
            PageNotice::new("Produto removido dos favoritos!", NotificationKind::Info)
        }
    }

    /// Add the selected quantity to a cart currently holding `cart_count` items.
    pub fn add_to_cart(&self, cart_count: u32) -> CartAddition {
        let quantity = self.quantity.value();
        tracing::info!(product = %self.product.id, quantity, "added to cart");
        CartAddition {
            quantity,
            cart_count: cart_count.saturating_add(quantity),
            notice: PageNotice::new(
                format!("{}x {} adicionado ao carrinho!", quantity, self.product.name),
                NotificationKind::Success,
            ),
        }
    }

    /// Select one colour; the previous one is deselected.
    pub fn select_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Select one size; the previous one is deselected.
    pub fn select_size(&mut self, size: impl Into<String>) {
        self.size = Some(size.into());
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn show_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    /// Swap the main image for a clicked thumbnail at full size.
    pub fn change_image(&mut self, thumbnail_src: &str) {
        self.main_image = Some(zoom_url(thumbnail_src));
    }

    pub fn main_image(&self) -> Option<&str> {
        self.main_image.as_deref()
    }

    /// What a share button does for a page at `page_url`.
    pub fn share(&self, target: ShareTarget, page_url: &str) -> ShareAction {
        let name = &self.product.name;
        match target {
            ShareTarget::WhatsApp => ShareAction::Open(format!(
                "https://wa.me/?text={}",
                url_encode(&format!("{} - {}", name, page_url))
            )),
            ShareTarget::Facebook => ShareAction::Open(format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                url_encode(page_url)
            )),
            ShareTarget::Twitter => ShareAction::Open(format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                url_encode(page_url),
                url_encode(name)
            )),
            ShareTarget::CopyLink => ShareAction::Copy {
                text: page_url.to_string(),
                notice: PageNotice::new(
                    "Link copiado para a área de transferência!",
                    NotificationKind::Success,
                ),
            },
        }
    }
}

/// Full-size variant of a thumbnail URL.
pub fn zoom_url(thumbnail_src: &str) -> String {
    thumbnail_src.replacen("w=200", "w=800", 1)
}
