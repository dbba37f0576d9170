//! Static page copy: headlines, stat targets, and info cards.
//!
//! Content is plain data so the widgets stay generic over what the page
//! happens to say.

use crate::page::SectionKind;

/// A headline statistic animated from zero when its section scrolls in.
#[derive(Debug, Clone)]
pub struct StatDef {
    pub section: SectionKind,
    pub label: &'static str,
    pub target: u64,
}

#[derive(Debug, Clone)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone)]
pub struct PageContent {
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    pub live_label: &'static str,
    pub stats: Vec<StatDef>,
    pub info_cards: Vec<InfoCard>,
    pub share_prompt: &'static str,
}

impl PageContent {
    pub fn standard() -> Self {
        Self {
            hero_title: "THE COST OF CUTS",
            hero_tagline: "Aid cuts put millions of lives at risk. A 1% pledge pushes back.",
            live_label: "people die every hour from preventable causes",
            stats: vec![
                StatDef {
                    section: SectionKind::Hero,
                    label: "lives at risk this decade",
                    target: 3_500_000,
                },
                StatDef {
                    section: SectionKind::Stats,
                    label: "preventable deaths each year",
                    target: 770_000,
                },
                StatDef {
                    section: SectionKind::Stats,
                    label: "children under five among them",
                    target: 490_000,
                },
                StatDef {
                    section: SectionKind::Stats,
                    label: "dollars to save one life",
                    target: 2_500,
                },
            ],
            info_cards: vec![
                InfoCard {
                    title: "Why now",
                    body: "Recent cuts to foreign aid have left proven health programs \
                           unfunded mid-stream. Bed nets, vaccines, and treatments that \
                           were already budgeted are no longer being delivered, and the \
                           shortfall is measured in lives, not percentages.",
                },
                InfoCard {
                    title: "Where the money goes",
                    body: "Independent charity evaluators track the handful of programs \
                           with the strongest evidence per dollar: malaria prevention, \
                           vitamin A supplementation, and direct cash transfers. A \
                           donation routed through them buys measurable outcomes.",
                },
                InfoCard {
                    title: "The 1% pledge",
                    body: "One percent of a typical income is small enough to never \
                           notice and large enough to fund hundreds of nets every \
                           single year. Set it up once, and it quietly keeps working.",
                },
            ],
            share_prompt: "Know someone who would give if asked? Ask them.",
        }
    }
}
