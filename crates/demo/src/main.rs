use std::collections::BTreeMap;

use anyhow::Context;
use colorstock::{Amount, Color, ColorStock};

/// JSON object of color name -> amount to load instead of the built-in samples.
const INPUT_ENV: &str = "COLORSTOCK_INPUT";

fn main() -> anyhow::Result<()> {
    colorstock_observability::init();

    let typed = ColorStock::from_color_map(BTreeMap::from([
        (Color::Red, Amount::new(10)),
        (Color::White, Amount::new(20)),
        (Color::Green, Amount::new(30)),
    ]));
    report("typed", &typed)?;

    match std::env::var(INPUT_ENV) {
        Ok(raw) => {
            let stock: ColorStock = serde_json::from_str(&raw)
                .with_context(|| format!("{INPUT_ENV} is not a valid color stock"))?;
            report("input", &stock)?;
        }
        Err(_) => {
            // Names outside the deployment's color set are rejected as a whole.
            match ColorStock::from_string_pairs([
                ("RED", Amount::new(10)),
                ("BLUE", Amount::new(20)),
                ("YELLOW", Amount::new(30)),
            ]) {
                Ok(stock) => report("strings", &stock)?,
                Err(err) => tracing::warn!(error = %err, "string stock rejected"),
            }
        }
    }

    Ok(())
}

fn report(label: &str, stock: &ColorStock) -> anyhow::Result<()> {
    for color in stock.colors() {
        let amount = stock.amount_for(color)?;
        tracing::info!(stock = label, %color, %amount, "color stock entry");
    }
    tracing::info!(stock = label, json = %serde_json::to_string(stock)?, "color stock loaded");
    Ok(())
}
