use serde::{Deserialize, Deserializer};

/// Image field as delivered by the CMS. An empty field arrives as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub url: Option<String>,
    pub alt: Option<String>,
}

impl ImageRef {
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

/// Link field. Unset links arrive as `{ "link_type": "Any" }` without a url.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkRef {
    pub url: Option<String>,
    pub target: Option<String>,
}

impl LinkRef {
    /// Trimmed url, or `None` when blank or a `javascript:` url.
    pub fn href(&self) -> Option<&str> {
        let url = self.url.as_deref()?.trim();
        let scheme = url.get(..11).unwrap_or(url);
        if url.is_empty() || scheme.eq_ignore_ascii_case("javascript:") {
            return None;
        }
        Some(url)
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.href().is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ItemSize {
    /// `sm` and `lg` are recognised; everything else is the medium size.
    pub fn from_cms(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("sm") => ItemSize::Sm,
            Some("lg") => ItemSize::Lg,
            _ => ItemSize::Md,
        }
    }

    pub fn image_classes(self) -> &'static str {
        match self {
            ItemSize::Sm => "h-14 w-14 md:h-16 md:w-16",
            ItemSize::Md => "h-20 w-20 md:h-24 md:w-24",
            ItemSize::Lg => "h-24 w-24 md:h-28 md:w-28",
        }
    }
}

fn lenient_size<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ItemSize>, D::Error> {
    let v = Option::<String>::deserialize(d)?;
    Ok(v.map(|s| ItemSize::from_cms(Some(&s))))
}

fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    use serde_json::Value;
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    })
}

/// One ticker entry, read-only once decoded.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeItem {
    pub image: Option<ImageRef>,
    pub link: Option<LinkRef>,
    #[serde(alias = "caption")]
    pub subtitle: Option<String>,
    /// Per-item size; the slice-level size applies when absent.
    #[serde(deserialize_with = "lenient_size")]
    pub size: Option<ItemSize>,
    #[serde(deserialize_with = "truthy")]
    pub contain: bool,
}

impl MarqueeItem {
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.as_ref().is_some_and(ImageRef::is_filled)
    }

    #[inline]
    pub fn filled_link(&self) -> Option<&LinkRef> {
        self.link.as_ref().filter(|l| l.is_filled())
    }

    pub fn caption(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Alt text falls back to the caption, then to empty.
    pub fn alt_text(&self) -> &str {
        self.image
            .as_ref()
            .and_then(|i| i.alt.as_deref())
            .filter(|a| !a.is_empty())
            .or_else(|| self.caption())
            .unwrap_or("")
    }
}

/// Which items may appear in the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eligibility {
    pub require_link: bool,
}

impl Eligibility {
    pub fn admits(&self, item: &MarqueeItem) -> bool {
        item.has_image() && (!self.require_link || item.filled_link().is_some())
    }

    pub fn filter<'a>(&self, items: &'a [MarqueeItem]) -> Vec<&'a MarqueeItem> {
        items.iter().filter(|it| self.admits(it)).collect()
    }
}
