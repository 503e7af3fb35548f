//! Referral links into the public store. Every link carries the partner's
//! reference code in the `ref` query parameter so the store can attribute the
//! visit; category links keep their own `category` filter alongside it.

use crate::app_lib::AppError;
use url::Url;

const REFERENCE_PARAM: &str = "ref";
const CATALOG_SEGMENT: &str = "roupas";

/// Store category a partner can promote directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: [Category; 4] = [
    Category {
        id: "camisetas",
        name: "T-shirts",
        description: "Our best-selling collection",
    },
    Category {
        id: "moletons",
        name: "Hoodies",
        description: "Comfort and style",
    },
    Category {
        id: "baby-looks",
        name: "Baby looks",
        description: "Fitted cut",
    },
    Category {
        id: "regatas",
        name: "Tank tops",
        description: "For hot days",
    },
];

/// Home page link: `<store>?ref=<code>`.
pub fn referral_link(store_url: &str, code: &str) -> Result<String, AppError> {
    let code = reference(code)?;
    let mut url = store(store_url)?;
    url.query_pairs_mut().append_pair(REFERENCE_PARAM, code);
    Ok(url.into())
}

/// Whole catalog link: `<store>/roupas?ref=<code>`.
pub fn store_link(store_url: &str, code: &str) -> Result<String, AppError> {
    let code = reference(code)?;
    let mut url = catalog(store_url)?;
    url.query_pairs_mut().append_pair(REFERENCE_PARAM, code);
    Ok(url.into())
}

/// Category link: `<store>/roupas?category=<id>&ref=<code>`.
pub fn category_link(store_url: &str, category: &Category, code: &str) -> Result<String, AppError> {
    let code = reference(code)?;
    let mut url = catalog(store_url)?;
    url.query_pairs_mut()
        .append_pair("category", category.id)
        .append_pair(REFERENCE_PARAM, code);
    Ok(url.into())
}

fn store(store_url: &str) -> Result<Url, AppError> {
    Url::parse(store_url.trim())
        .map_err(|err| AppError::Config(format!("Invalid store URL: {err}")))
}

fn catalog(store_url: &str) -> Result<Url, AppError> {
    let mut url = store(store_url)?;
    url.path_segments_mut()
        .map_err(|()| AppError::Config("Store URL cannot hold a path.".to_string()))?
        .pop_if_empty()
        .push(CATALOG_SEGMENT);
    Ok(url)
}

fn reference(code: &str) -> Result<&str, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::Validation(
            "Your reference code is not available yet.".to_string(),
        ));
    }
    Ok(code)
}
