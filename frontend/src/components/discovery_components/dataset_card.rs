//! Dataset card shown in the result list.

use common::dataset::{Dataset, Pricing};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{
    go_icons::GoDatabase,
    md_action_icons::MdVerifiedUser,
    md_communication_icons::{MdBusiness, MdLocationOn},
    md_toggle_icons::MdStar,
}};

use crate::data_definitions::display_context::DisplayContext;

#[component]
pub fn DatasetCard(dataset: ReadSignal<Dataset>, position: usize) -> Element {
    let theme = use_context::<DisplayContext>().theme;
    let card_background = theme().card_background();
    let muted = theme().muted_text_color();
    let Dataset {
        title,
        description,
        provider,
        category,
        license,
        pricing,
        coverage,
        update_frequency,
        quality,
        verification,
        rating,
        review_count,
        ..
    } = dataset.read().clone();

    rsx! {
        div {
            class: "x-dataset-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: {card_background};
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            // Row 1: POSITION - ICON - TITLE - SPACER - PRICE
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px; width: 100%;",
                span {
                    style: "font-size: 18px; font-weight: 200; color: {muted};",
                    "{position}."
                }
                Icon { icon: GoDatabase, style: "width: 18px; height: 18px; color: {muted}; flex-shrink: 0;" }
                div {
                    style: "
                        font-size: 20px;
                        line-height: 28px;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        min-width: 0;
                    ",
                    "{title}"
                }
                if verification.dataset_verified {
                    span {
                        title: "Verified dataset",
                        Icon { icon: MdVerifiedUser, style: "width: 18px; height: 18px; color: #16A34A;" }
                    }
                }
                div { style: "flex: 1 1 auto;" }
                PriceTag { pricing }
            }
            // Row 2: PROVIDER - CATEGORY - COVERAGE
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 14px; font-size: 14px; color: {muted};",
                span {
                    style: "display: flex; align-items: center; gap: 4px;",
                    Icon { icon: MdBusiness, style: "width: 16px; height: 16px;" }
                    "{provider}"
                    if verification.provider_verified {
                        Icon { icon: MdVerifiedUser, style: "width: 14px; height: 14px; color: #16A34A;" }
                    }
                }
                span { style: "font-style: italic;", "{category}" }
                if !coverage.is_empty() {
                    span {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                        "{coverage}"
                    }
                }
            }
            // Row 3: DESCRIPTION
            p {
                style: "
                    margin: 0;
                    font-size: 15px;
                    line-height: 21px;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                ",
                "{description}"
            }
            // Row 4: LICENSE - UPDATES - QUALITY - RATING
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 14px; font-size: 13px; color: {muted};",
                if !license.is_empty() {
                    span {
                        style: "border: 1px solid {muted}; border-radius: 9999px; padding: 1px 8px;",
                        "{license}"
                    }
                }
                if !update_frequency.is_empty() {
                    span { "Updated {update_frequency}" }
                }
                span { title: "Completeness {quality.completeness}, accuracy {quality.accuracy}, timeliness {quality.timeliness}, consistency {quality.consistency}",
                    "Quality {quality.overall()}%"
                }
                div { style: "flex: 1 1 auto;" }
                span {
                    style: "display: flex; align-items: center; gap: 2px;",
                    Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #F59E0B;" }
                    "{rating:.1} ({review_count})"
                }
            }
        }
    }
}

#[component]
fn PriceTag(pricing: Pricing) -> Element {
    let (background, color) = match &pricing {
        Pricing::Free => ("#DCFCE7", "#166534"),
        Pricing::Paid { .. } => ("#E0E7FF", "#3730A3"),
    };
    rsx! {
        span {
            style: "
                font-size: 15px;
                font-weight: 500;
                padding: 2px 10px;
                border-radius: 9999px;
                background: {background};
                color: {color};
                flex-shrink: 0;
            ",
            "{pricing}"
        }
    }
}
