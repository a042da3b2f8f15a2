//! `config show` / `config set` commands: the CLI face of the admin
//! settings surface.

use clap::ValueEnum;

use ringcraft_core::settings::{load_storefront_config, save_storefront_config};
use ringcraft_types::config::StorefrontConfig;

use crate::state::AppState;

/// The five configurator features, in their wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Feature {
    #[value(name = "base-item-list")]
    BaseItemList,
    #[value(name = "base-item-detail")]
    BaseItemDetail,
    #[value(name = "variant-list")]
    VariantList,
    #[value(name = "variant-detail")]
    VariantDetail,
    #[value(name = "complete-page")]
    CompletePage,
}

impl Feature {
    fn label(self) -> &'static str {
        match self {
            Feature::BaseItemList => "base-item-list",
            Feature::BaseItemDetail => "base-item-detail",
            Feature::VariantList => "variant-list",
            Feature::VariantDetail => "variant-detail",
            Feature::CompletePage => "complete-page",
        }
    }

    fn apply(self, config: &mut StorefrontConfig, handle: String) {
        let slot = match self {
            Feature::BaseItemList => &mut config.base_item_list,
            Feature::BaseItemDetail => &mut config.base_item_detail,
            Feature::VariantList => &mut config.variant_list,
            Feature::VariantDetail => &mut config.variant_detail,
            Feature::CompletePage => &mut config.complete_page,
        };
        *slot = Some(handle);
    }
}

/// Print the current feature mappings.
pub async fn show_config(state: &AppState, json: bool) -> anyhow::Result<()> {
    let config = load_storefront_config(state.settings.as_ref()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!();
    println!("  {}", console::style("Storefront configuration").bold());
    println!();
    print_mapping("base-item-list", config.base_item_list.as_deref());
    print_mapping("base-item-detail", config.base_item_detail.as_deref());
    print_mapping("variant-list", config.variant_list.as_deref());
    print_mapping("variant-detail", config.variant_detail.as_deref());
    print_mapping("complete-page", config.complete_page.as_deref());
    println!();

    Ok(())
}

fn print_mapping(feature: &str, handle: Option<&str>) {
    match handle {
        Some(handle) => println!(
            "  {:<18} {}",
            feature,
            console::style(handle).cyan()
        ),
        None => println!(
            "  {:<18} {}",
            feature,
            console::style("(not set)").dim()
        ),
    }
}

/// Update a single feature mapping and save the blob.
pub async fn set_feature(
    state: &AppState,
    feature: Feature,
    handle: String,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = load_storefront_config(state.settings.as_ref()).await?;
    feature.apply(&mut config, handle.clone());
    save_storefront_config(state.settings.as_ref(), &config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!(
            "  {} {} -> {}",
            console::style("✓").green(),
            feature.label(),
            console::style(&handle).cyan()
        );
    }

    Ok(())
}
