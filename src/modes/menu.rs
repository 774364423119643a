use anyhow::Result;
use log::debug;
use std::io::Write;

use crate::menu::{FoodItem, FoodSource, MenuConfig, load_foods};

/// Prints the food catalog, one item per line
pub struct MenuMode<S> {
    config: MenuConfig,
    source: S,
}

impl<S: FoodSource> MenuMode<S> {
    pub fn new(config: MenuConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let request = self.config.request();
        if let Ok(payload) = request.to_json() {
            debug!("catalog request for {}: {}", self.config.endpoint, payload);
        }

        let foods = load_foods(&self.source, &request);
        write_foods(out, &foods)?;
        Ok(())
    }
}

fn write_foods(out: &mut impl Write, foods: &[FoodItem]) -> std::io::Result<()> {
    writeln!(out, "Online Food Delivery")?;
    if foods.is_empty() {
        writeln!(out, "(no items)")?;
    }
    for item in foods {
        writeln!(out, "{:<32} {}", item.name, item.image_url())?;
    }
    Ok(())
}
