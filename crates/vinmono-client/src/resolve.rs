//! Resolvers for raw sub-documents: categories, images, volumes, raw
//! materials. All of them answer `None` for absent or all-empty input
//! rather than erroring — partial upstream documents are the normal case.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use vinmono_core::{Category, ImageSize, ProductImage, RawMaterial, Volume};

use crate::derive;
use crate::filters;

/// Matches the `cache/WIDTHxHEIGHT` segment the image CDN embeds in URLs,
/// e.g. `.../cache/515x515-0/7746702-1.jpg`.
static IMAGE_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cache/(\d+)x(\d+)[/-]").expect("valid regex"));

fn field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Builds a [`Category`] from a partial sub-document. Sub-documents with no
/// usable field at all resolve to `None`.
#[must_use]
pub fn category(raw: &Value) -> Option<Category> {
    let cat = Category {
        code: field(raw, "code"),
        name: field(raw, "name"),
        url: field(raw, "url"),
    };
    if cat.is_empty() {
        None
    } else {
        Some(cat)
    }
}

/// Builds a [`ProductImage`], deriving the pixel size from the URL. A URL
/// without a recognizable size yields `size: None`, never an error.
#[must_use]
pub fn product_image(raw: &Value) -> Option<ProductImage> {
    let url = field(raw, "url")?;
    Some(ProductImage {
        format: field(raw, "format").unwrap_or_default(),
        description: field(raw, "altText"),
        image_type: field(raw, "imageType").unwrap_or_default(),
        size: image_size_from_url(&url),
        url,
    })
}

fn image_size_from_url(url: &str) -> Option<ImageSize> {
    let captures = IMAGE_SIZE_RE.captures(url)?;
    let max_width = captures.get(1)?.as_str().parse().ok()?;
    let max_height = captures.get(2)?.as_str().parse().ok()?;
    Some(ImageSize {
        max_width,
        max_height,
    })
}

/// Builds a [`Volume`] from a `{ value, formattedValue }` sub-document.
/// Empty objects (gift articles have no volume) resolve to `None`.
#[must_use]
pub fn volume(raw: &Value) -> Option<Volume> {
    let obj = raw.as_object().filter(|o| !o.is_empty())?;
    let value = obj.get("value").map(filters::number)?.as_f64()?;
    let formatted_value = field(raw, "formattedValue").unwrap_or_default();
    let unit = derive::volume_unit(&formatted_value).unwrap_or_default();
    Some(Volume {
        value,
        formatted_value,
        unit,
    })
}

/// Builds a [`RawMaterial`] from an ingredient record. The percentage is
/// parsed only when the source carries one; the detail mapper fills in the
/// feed's implicit whole-blend share.
#[must_use]
pub fn raw_material(raw: &Value) -> Option<RawMaterial> {
    let id = field(raw, "code").or_else(|| field(raw, "id"))?;
    let name = field(raw, "readableValue").or_else(|| field(raw, "name"))?;
    let percentage = raw.get("percentage").and_then(|p| filters::number(p).as_f64());
    Some(RawMaterial {
        id,
        name,
        percentage,
    })
}
