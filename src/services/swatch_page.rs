use rand::Rng;
use serde::Serialize;
use shade_family::{invert, list, Family};
use std::path::Path;
use tera::{Context, Tera};

use crate::error::PageError;

const TEMPLATE_NAME: &str = "swatches.html";
const TEMPLATE: &str = include_str!("../../templates/swatches.html");

#[derive(Debug, Serialize)]
struct FamilySwatches {
    key: &'static str,
    name: &'static str,
    swatches: Vec<Swatch>,
}

#[derive(Debug, Serialize)]
struct Swatch {
    color: String,
    inverse: String,
}

/// Renders the HTML page showing random shades of every family
pub struct SwatchPage {
    tera: Tera,
}

impl SwatchPage {
    /// Compile the embedded page template
    pub fn new() -> Result<Self, PageError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the page with `per_family` shades for each family, in key order.
    ///
    /// Each swatch shows its color as background and the inverted color
    /// as text.
    pub fn render<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        per_family: usize,
    ) -> Result<String, PageError> {
        let mut families = Vec::new();
        for key in list() {
            let family = match Family::new(key) {
                Ok(family) => family,
                Err(e) => {
                    tracing::warn!(%e, "could not get color family");
                    continue;
                }
            };

            let swatches = (0..per_family)
                .map(|_| -> Result<Swatch, PageError> {
                    let color = family.random(&mut *rng);
                    let inverse = invert(&color)?;
                    Ok(Swatch { color, inverse })
                })
                .collect::<Result<Vec<_>, PageError>>()?;

            families.push(FamilySwatches {
                key,
                name: family.name,
                swatches,
            });
        }

        let mut context = Context::new();
        context.insert("families", &families);
        let html = self.tera.render(TEMPLATE_NAME, &context)?;

        tracing::debug!(
            families = families.len(),
            per_family,
            bytes = html.len(),
            "Rendered swatch page"
        );

        Ok(html)
    }

    /// Render the page and write it to `path`
    pub fn write_to<R: Rng + ?Sized>(
        &self,
        path: &Path,
        rng: &mut R,
        per_family: usize,
    ) -> Result<usize, PageError> {
        let html = self.render(rng, per_family)?;
        std::fs::write(path, &html)?;
        Ok(html.len())
    }
}
