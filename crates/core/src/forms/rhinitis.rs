//! Rhinitis (비염) form.
//!
//! The four main symptoms are severity graded. In the note, severe (`++`) entries are listed
//! first and separated from the milder ones by ` / `.

use super::{
    parse_status, render_group, ChartForm, FieldSpec, FormCatalog, FormFields, NoteBuilder,
    SymptomGroupSpec, SymptomKey,
};
use crate::{ChartError, ChartResult, Condition};
use pedichart_types::{Presence, Severity, SymptomEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainSymptom {
    NasalCongestion,
    Rhinorrhea,
    Sneezing,
    Itching,
}

impl SymptomKey for MainSymptom {
    const ALL: &'static [Self] = &[
        MainSymptom::NasalCongestion,
        MainSymptom::Rhinorrhea,
        MainSymptom::Sneezing,
        MainSymptom::Itching,
    ];

    fn key(self) -> &'static str {
        match self {
            MainSymptom::NasalCongestion => "nasalCongestion",
            MainSymptom::Rhinorrhea => "rhinorrhea",
            MainSymptom::Sneezing => "sneezing",
            MainSymptom::Itching => "itching",
        }
    }

    fn label(self) -> &'static str {
        match self {
            MainSymptom::NasalCongestion => "코막힘",
            MainSymptom::Rhinorrhea => "콧물",
            MainSymptom::Sneezing => "재채기",
            MainSymptom::Itching => "소양감",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccompanyingSymptom {
    PostNasalDrip,
    Epistaxis,
    MouthBreathing,
    Snoring,
    TossingAndTurning,
    Bruxism,
}

impl SymptomKey for AccompanyingSymptom {
    const ALL: &'static [Self] = &[
        AccompanyingSymptom::PostNasalDrip,
        AccompanyingSymptom::Epistaxis,
        AccompanyingSymptom::MouthBreathing,
        AccompanyingSymptom::Snoring,
        AccompanyingSymptom::TossingAndTurning,
        AccompanyingSymptom::Bruxism,
    ];

    fn key(self) -> &'static str {
        match self {
            AccompanyingSymptom::PostNasalDrip => "postNasalDrip",
            AccompanyingSymptom::Epistaxis => "epistaxis",
            AccompanyingSymptom::MouthBreathing => "mouthBreathing",
            AccompanyingSymptom::Snoring => "snoring",
            AccompanyingSymptom::TossingAndTurning => "tossingAndTurning",
            AccompanyingSymptom::Bruxism => "bruxism",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AccompanyingSymptom::PostNasalDrip => "후비루",
            AccompanyingSymptom::Epistaxis => "코피",
            AccompanyingSymptom::MouthBreathing => "구강호흡",
            AccompanyingSymptom::Snoring => "코골이",
            AccompanyingSymptom::TossingAndTurning => "뒤척임",
            AccompanyingSymptom::Bruxism => "이갈이",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RhinitisForm {
    pub onset_and_aggravating_factors: String,
    pub nasal_congestion: SymptomEntry<Severity>,
    pub rhinorrhea: SymptomEntry<Severity>,
    pub sneezing: SymptomEntry<Severity>,
    pub itching: SymptomEntry<Severity>,
    pub post_nasal_drip: SymptomEntry<Presence>,
    pub epistaxis: SymptomEntry<Presence>,
    pub mouth_breathing: SymptomEntry<Presence>,
    pub snoring: SymptomEntry<Presence>,
    pub tossing_and_turning: SymptomEntry<Presence>,
    pub bruxism: SymptomEntry<Presence>,
    pub findings: String,
    pub other: String,
}

/// A symptom key resolved against either of the rhinitis groups.
enum RhinitisSymptom {
    Main(MainSymptom),
    Accompanying(AccompanyingSymptom),
}

impl RhinitisForm {
    pub fn main(&self, symptom: MainSymptom) -> &SymptomEntry<Severity> {
        match symptom {
            MainSymptom::NasalCongestion => &self.nasal_congestion,
            MainSymptom::Rhinorrhea => &self.rhinorrhea,
            MainSymptom::Sneezing => &self.sneezing,
            MainSymptom::Itching => &self.itching,
        }
    }

    pub fn main_mut(&mut self, symptom: MainSymptom) -> &mut SymptomEntry<Severity> {
        match symptom {
            MainSymptom::NasalCongestion => &mut self.nasal_congestion,
            MainSymptom::Rhinorrhea => &mut self.rhinorrhea,
            MainSymptom::Sneezing => &mut self.sneezing,
            MainSymptom::Itching => &mut self.itching,
        }
    }

    pub fn accompanying(&self, symptom: AccompanyingSymptom) -> &SymptomEntry<Presence> {
        match symptom {
            AccompanyingSymptom::PostNasalDrip => &self.post_nasal_drip,
            AccompanyingSymptom::Epistaxis => &self.epistaxis,
            AccompanyingSymptom::MouthBreathing => &self.mouth_breathing,
            AccompanyingSymptom::Snoring => &self.snoring,
            AccompanyingSymptom::TossingAndTurning => &self.tossing_and_turning,
            AccompanyingSymptom::Bruxism => &self.bruxism,
        }
    }

    pub fn accompanying_mut(&mut self, symptom: AccompanyingSymptom) -> &mut SymptomEntry<Presence> {
        match symptom {
            AccompanyingSymptom::PostNasalDrip => &mut self.post_nasal_drip,
            AccompanyingSymptom::Epistaxis => &mut self.epistaxis,
            AccompanyingSymptom::MouthBreathing => &mut self.mouth_breathing,
            AccompanyingSymptom::Snoring => &mut self.snoring,
            AccompanyingSymptom::TossingAndTurning => &mut self.tossing_and_turning,
            AccompanyingSymptom::Bruxism => &mut self.bruxism,
        }
    }

    fn lookup(symptom: &str) -> ChartResult<RhinitisSymptom> {
        if let Some(main) = MainSymptom::from_key(symptom) {
            return Ok(RhinitisSymptom::Main(main));
        }
        if let Some(accompanying) = AccompanyingSymptom::from_key(symptom) {
            return Ok(RhinitisSymptom::Accompanying(accompanying));
        }
        Err(ChartError::UnknownSymptom {
            condition: Condition::Rhinitis,
            symptom: symptom.to_owned(),
        })
    }

    /// Severe entries, then ` / `, then the rest; each part in catalog order.
    fn main_symptom_line(&self) -> String {
        let (severe, other): (Vec<MainSymptom>, Vec<MainSymptom>) = MainSymptom::ALL
            .iter()
            .copied()
            .filter(|&s| self.main(s).is_set())
            .partition(|&s| self.main(s).status.is_some_and(Severity::is_severe));

        let render = |group: Vec<MainSymptom>| {
            group
                .into_iter()
                .filter_map(|s| self.main(s).render(s.label()))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let severe = render(severe);
        let other = render(other);
        match (severe.is_empty(), other.is_empty()) {
            (false, false) => format!("{severe} / {other}"),
            (false, true) => severe,
            (true, _) => other,
        }
    }
}

impl FormFields for RhinitisForm {
    fn condition(&self) -> Condition {
        Condition::Rhinitis
    }

    fn set_text(&mut self, field: &str, value: String) -> ChartResult<()> {
        let slot = match field {
            "onsetAndAggravatingFactors" => &mut self.onset_and_aggravating_factors,
            "findings" => &mut self.findings,
            "other" => &mut self.other,
            _ => {
                return Err(ChartError::UnknownField {
                    condition: Condition::Rhinitis,
                    field: field.to_owned(),
                })
            }
        };
        *slot = value;
        Ok(())
    }

    fn toggle(&mut self, symptom: &str, status: &str) -> ChartResult<()> {
        match Self::lookup(symptom)? {
            RhinitisSymptom::Main(main) => {
                let status = parse_status::<Severity>(symptom, status)?;
                self.main_mut(main).toggle(status);
            }
            RhinitisSymptom::Accompanying(accompanying) => {
                let status = parse_status::<Presence>(symptom, status)?;
                self.accompanying_mut(accompanying).toggle(status);
            }
        }
        Ok(())
    }

    fn set_detail(&mut self, symptom: &str, detail: String) -> ChartResult<()> {
        match Self::lookup(symptom)? {
            RhinitisSymptom::Main(main) => self.main_mut(main).set_detail(detail),
            RhinitisSymptom::Accompanying(accompanying) => {
                self.accompanying_mut(accompanying).set_detail(detail)
            }
        }
        Ok(())
    }

    fn assemble(&self) -> String {
        let mut note = NoteBuilder::new(Condition::Rhinitis);
        note.line("o/s, agg", &self.onset_and_aggravating_factors);
        note.line("증상", &self.main_symptom_line());
        note.symptoms(
            "동반 증상",
            render_group(move |s: AccompanyingSymptom| self.accompanying(s)),
        );
        note.line("비강/구인두 소견", &self.findings);
        note.other(&self.other);
        note.finish()
    }
}

impl ChartForm for RhinitisForm {
    const CONDITION: Condition = Condition::Rhinitis;

    fn catalog() -> FormCatalog {
        FormCatalog {
            condition: Self::CONDITION,
            header: Self::CONDITION.header(),
            text_fields: vec![
                FieldSpec { name: "onsetAndAggravatingFactors", label: "o/s, agg" },
                FieldSpec { name: "findings", label: "비강/구인두 소견" },
                FieldSpec { name: "other", label: "기타" },
            ],
            symptom_groups: vec![
                SymptomGroupSpec::of::<MainSymptom, Severity>("주증상"),
                SymptomGroupSpec::of::<AccompanyingSymptom, Presence>("동반 증상"),
            ],
        }
    }
}
