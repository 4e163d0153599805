//! HTML pages for the quote form.
//!
//! The result template carries one `$price<Class>` placeholder per car
//! class; rendering swaps each placeholder for that class's quote.

use std::path::Path;

use crate::error::AppError;
use crate::pricing::{CarClass, PriceQuote};

const BUILTIN_FORM: &str = include_str!("../templates/form.html");
const BUILTIN_RESULT: &str = include_str!("../templates/result.html");

const PAGE_CLOSE: &str = "</body>\n</html>\n";

#[derive(Debug, Clone)]
pub struct TemplateSet {
    form: String,
    result: String,
}

impl TemplateSet {
    /// Templates compiled into the binary
    pub fn builtin() -> Self {
        Self {
            form: BUILTIN_FORM.to_string(),
            result: BUILTIN_RESULT.to_string(),
        }
    }

    /// Read `form.html` and `result.html` from a directory
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| {
                AppError::TemplateError(format!("{}: {}", path.display(), e))
            })
        };

        Ok(Self {
            form: read("form.html")?,
            result: read("result.html")?,
        })
    }

    /// Directory templates when configured, built-in ones otherwise
    pub fn from_dir(dir: Option<&str>) -> Result<Self, AppError> {
        match dir {
            Some(dir) => Self::load(Path::new(dir)),
            None => Ok(Self::builtin()),
        }
    }

    /// The empty form
    pub fn form_page(&self) -> String {
        format!("{}{}", self.form, PAGE_CLOSE)
    }

    /// Form followed by the result section with every placeholder filled
    pub fn render_quotes(&self, quotes: &[(CarClass, PriceQuote)]) -> String {
        let mut page = format!("{}{}", self.form, self.result);

        for (class, quote) in quotes {
            page = page.replace(&placeholder(*class), &escape_html(&quote.to_string()));
        }

        page
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn placeholder(class: CarClass) -> String {
    format!("$price{}", class.as_str())
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
