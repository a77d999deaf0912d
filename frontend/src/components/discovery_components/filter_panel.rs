//! Left panel with the category, pricing, currency and license filters.

use common::{
    category::CategoryId,
    filter_state::{Currency, FilterPatch, License, PricingType},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::data_definitions::discovery_context::DiscoveryContext;


#[component]
pub fn FilterPanel() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let has_active_filters = use_memo(move || ctx.filters.read().has_active_filters());
    let show_price_range = use_memo(move || ctx.filters.read().state().pricing_type == PricingType::Paid);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                padding: 16px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h2 { style: "font-size: 20px; font-weight: 500; margin: 0;", "Filters" }
                div { style: "flex-grow: 1;" }
                if has_active_filters() {
                    button {
                        style: "
                            border: none;
                            background: none;
                            color: #4F46E5;
                            cursor: pointer;
                            font-size: 14px;
                        ",
                        onclick: move |_| ctx.clear_filters.call(()),
                        "Clear filters"
                    }
                }
            }
            CategoryFilter {}
            PricingFilter {}
            if show_price_range() {
                PriceRangeFilter {}
            }
            CurrencyFilter {}
            LicenseFilter {}
        }
    }
}

#[component]
fn FilterSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            span {
                style: "font-size: 13px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.04em; opacity: 0.7;",
                "{title}"
            }
            {children}
        }
    }
}

pub(crate) const SELECT_STYLE: &str = "
    padding: 6px 8px;
    border-radius: 6px;
    border: 1px solid rgba(0,0,0,0.3);
    font-size: 15px;
";

#[component]
fn CategoryFilter() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let selected = use_memo(move || ctx.filters.read().state().category.clone());
    let options = use_memo(move || {
        let lookup = ctx.categories.read();
        let mut options = lookup
            .iter()
            .map(|(id, name)| (id.clone(), name.to_string()))
            .collect::<Vec<_>>();
        // a selected category that disappeared from the list still needs an option to show
        if let Some(selected) = selected() {
            if lookup.name(&selected).is_none() {
                options.push((selected, "Unknown category".to_string()));
            }
        }
        options
    });

    rsx! {
        FilterSection {
            title: "Category",
            select {
                style: SELECT_STYLE,
                onchange: move |event: Event<FormData>| {
                    let value = event.value();
                    let category = if value.is_empty() { None } else { Some(CategoryId::from(value)) };
                    ctx.update_filter.call(FilterPatch::default().category(category));
                },
                option { value: "", selected: selected().is_none(), "All categories" }
                for (id, name) in options() {
                    option {
                        key: "{id}",
                        value: "{id}",
                        selected: selected() == Some(id.clone()),
                        "{name}"
                    }
                }
            }
        }
    }
}

#[component]
fn PricingFilter() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let selected = use_memo(move || ctx.filters.read().state().pricing_type);

    rsx! {
        FilterSection {
            title: "Pricing",
            div {
                style: "display: flex; flex-direction: row; gap: 6px;",
                for pricing_type in PricingType::ALL {
                    button {
                        key: "{pricing_type.as_str()}",
                        style: "
                            padding: 4px 12px;
                            border-radius: 9999px;
                            cursor: pointer;
                            border: 1px solid rgba(0,0,0,0.3);
                            background: {pill_background(selected() == pricing_type)};
                            color: {pill_color(selected() == pricing_type)};
                        ",
                        onclick: move |_| ctx.update_filter.call(FilterPatch::default().pricing_type(pricing_type)),
                        "{pricing_type.label()}"
                    }
                }
            }
        }
    }
}

fn pill_background(active: bool) -> &'static str {
    if active { "#4F46E5" } else { "transparent" }
}

fn pill_color(active: bool) -> &'static str {
    if active { "white" } else { "inherit" }
}

#[component]
fn PriceRangeFilter() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let price_range = use_memo(move || ctx.filters.read().state().price_range.clone());

    rsx! {
        FilterSection {
            title: "Price range",
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                input {
                    r#type: "text",
                    placeholder: "Min",
                    style: "width: 90px; {SELECT_STYLE}",
                    value: "{price_range().min}",
                    oninput: move |event: Event<FormData>| {
                        let patch = FilterPatch::default().min_price(event.value(), ctx.filters.read().state());
                        ctx.update_filter.call(patch);
                    },
                }
                span { "-" }
                input {
                    r#type: "text",
                    placeholder: "Max",
                    style: "width: 90px; {SELECT_STYLE}",
                    value: "{price_range().max}",
                    oninput: move |event: Event<FormData>| {
                        let patch = FilterPatch::default().max_price(event.value(), ctx.filters.read().state());
                        ctx.update_filter.call(patch);
                    },
                }
            }
        }
    }
}

#[component]
fn CurrencyFilter() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let selected = use_memo(move || ctx.filters.read().state().currency);

    rsx! {
        FilterSection {
            title: "Currency",
            select {
                style: SELECT_STYLE,
                onchange: move |event: Event<FormData>| {
                    match event.value().parse::<Currency>() {
                        Ok(currency) => ctx.update_filter.call(FilterPatch::default().currency(currency)),
                        Err(e) => dioxus::logger::tracing::warn!("ignoring currency selection: {e}"),
                    }
                },
                for currency in Currency::ALL {
                    option {
                        key: "{currency}",
                        value: "{currency}",
                        selected: selected() == currency,
                        "{currency}"
                    }
                }
            }
        }
    }
}

#[component]
fn LicenseFilter() -> Element {
    rsx! {
        FilterSection {
            title: "License",
            for license in License::ALL {
                LicenseCheckbox { key: "{license}", license }
            }
        }
    }
}

#[component]
fn LicenseCheckbox(license: License) -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let is_checked = use_memo(move || ctx.filters.read().state().licenses.contains(&license));

    rsx! {
        div {
            class: "x-license-filter-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                align-items: center;
            ",
            onclick: move |_| ctx.toggle_license.call(license),
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: #4F46E5; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; flex-shrink: 0;" }
            }
            span { style: "font-size: 16px;", "{license}" }
        }
    }
}
