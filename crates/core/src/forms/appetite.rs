//! Appetite loss (식욕부진) form.

use super::{
    join_present, parse_status, render_group, ChartForm, FieldSpec, FormCatalog, FormFields,
    NoteBuilder, SymptomGroupSpec, SymptomKey,
};
use crate::{ChartError, ChartResult, Condition};
use pedichart_types::{Presence, SymptomEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer to "does the child complain of hunger".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HungerLevel {
    #[serde(rename = "없음")]
    None,
    #[serde(rename = "거의 없음")]
    Rarely,
    #[serde(rename = "있음")]
    Present,
}

impl HungerLevel {
    pub const ALL: [HungerLevel; 3] = [HungerLevel::None, HungerLevel::Rarely, HungerLevel::Present];

    pub fn label(self) -> &'static str {
        match self {
            HungerLevel::None => "없음",
            HungerLevel::Rarely => "거의 없음",
            HungerLevel::Present => "있음",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|h| h.label() == label)
    }
}

impl fmt::Display for HungerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppetiteSymptom {
    AbdominalPain,
    DefecationDuringMeal,
    Burping,
    Indigestion,
    BowelSounds,
    Nausea,
    PickyEating,
    NewFoodAversion,
}

impl SymptomKey for AppetiteSymptom {
    const ALL: &'static [Self] = &[
        AppetiteSymptom::AbdominalPain,
        AppetiteSymptom::DefecationDuringMeal,
        AppetiteSymptom::Burping,
        AppetiteSymptom::Indigestion,
        AppetiteSymptom::BowelSounds,
        AppetiteSymptom::Nausea,
        AppetiteSymptom::PickyEating,
        AppetiteSymptom::NewFoodAversion,
    ];

    fn key(self) -> &'static str {
        match self {
            AppetiteSymptom::AbdominalPain => "abdominalPain",
            AppetiteSymptom::DefecationDuringMeal => "defecationDuringMeal",
            AppetiteSymptom::Burping => "burping",
            AppetiteSymptom::Indigestion => "indigestion",
            AppetiteSymptom::BowelSounds => "bowelSounds",
            AppetiteSymptom::Nausea => "nausea",
            AppetiteSymptom::PickyEating => "pickyEating",
            AppetiteSymptom::NewFoodAversion => "newFoodAversion",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AppetiteSymptom::AbdominalPain => "복통",
            AppetiteSymptom::DefecationDuringMeal => "식사중배변",
            AppetiteSymptom::Burping => "트림",
            AppetiteSymptom::Indigestion => "식체",
            AppetiteSymptom::BowelSounds => "장명",
            AppetiteSymptom::Nausea => "오심",
            AppetiteSymptom::PickyEating => "편식",
            AppetiteSymptom::NewFoodAversion => "새로운 음식 불호",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppetiteForm {
    pub meal_amount: String,
    pub hunger_complaint: Option<HungerLevel>,
    pub custom_hunger: String,
    pub eating_habits: String,
    pub abdominal_pain: SymptomEntry<Presence>,
    pub defecation_during_meal: SymptomEntry<Presence>,
    pub burping: SymptomEntry<Presence>,
    pub indigestion: SymptomEntry<Presence>,
    pub bowel_sounds: SymptomEntry<Presence>,
    pub nausea: SymptomEntry<Presence>,
    pub picky_eating: SymptomEntry<Presence>,
    pub new_food_aversion: SymptomEntry<Presence>,
    pub other: String,
}

impl AppetiteForm {
    pub fn symptom(&self, symptom: AppetiteSymptom) -> &SymptomEntry<Presence> {
        match symptom {
            AppetiteSymptom::AbdominalPain => &self.abdominal_pain,
            AppetiteSymptom::DefecationDuringMeal => &self.defecation_during_meal,
            AppetiteSymptom::Burping => &self.burping,
            AppetiteSymptom::Indigestion => &self.indigestion,
            AppetiteSymptom::BowelSounds => &self.bowel_sounds,
            AppetiteSymptom::Nausea => &self.nausea,
            AppetiteSymptom::PickyEating => &self.picky_eating,
            AppetiteSymptom::NewFoodAversion => &self.new_food_aversion,
        }
    }

    pub fn symptom_mut(&mut self, symptom: AppetiteSymptom) -> &mut SymptomEntry<Presence> {
        match symptom {
            AppetiteSymptom::AbdominalPain => &mut self.abdominal_pain,
            AppetiteSymptom::DefecationDuringMeal => &mut self.defecation_during_meal,
            AppetiteSymptom::Burping => &mut self.burping,
            AppetiteSymptom::Indigestion => &mut self.indigestion,
            AppetiteSymptom::BowelSounds => &mut self.bowel_sounds,
            AppetiteSymptom::Nausea => &mut self.nausea,
            AppetiteSymptom::PickyEating => &mut self.picky_eating,
            AppetiteSymptom::NewFoodAversion => &mut self.new_food_aversion,
        }
    }

    fn lookup(symptom: &str) -> ChartResult<AppetiteSymptom> {
        AppetiteSymptom::from_key(symptom).ok_or_else(|| ChartError::UnknownSymptom {
            condition: Condition::Appetite,
            symptom: symptom.to_owned(),
        })
    }
}

impl FormFields for AppetiteForm {
    fn condition(&self) -> Condition {
        Condition::Appetite
    }

    fn set_text(&mut self, field: &str, value: String) -> ChartResult<()> {
        match field {
            "mealAmount" => self.meal_amount = value,
            "hungerComplaint" => {
                self.hunger_complaint = if value.trim().is_empty() {
                    None
                } else {
                    Some(HungerLevel::from_label(&value).ok_or_else(|| {
                        ChartError::InvalidChoice {
                            field: field.to_owned(),
                            value: value.clone(),
                        }
                    })?)
                };
            }
            "customHunger" => self.custom_hunger = value,
            "eatingHabits" => self.eating_habits = value,
            "other" => self.other = value,
            _ => {
                return Err(ChartError::UnknownField {
                    condition: Condition::Appetite,
                    field: field.to_owned(),
                })
            }
        }
        Ok(())
    }

    fn toggle(&mut self, symptom: &str, status: &str) -> ChartResult<()> {
        let key = Self::lookup(symptom)?;
        let status = parse_status::<Presence>(symptom, status)?;
        self.symptom_mut(key).toggle(status);
        Ok(())
    }

    fn set_detail(&mut self, symptom: &str, detail: String) -> ChartResult<()> {
        let key = Self::lookup(symptom)?;
        self.symptom_mut(key).set_detail(detail);
        Ok(())
    }

    fn assemble(&self) -> String {
        let mut note = NoteBuilder::new(Condition::Appetite);
        note.line("식사량", &self.meal_amount);

        let hunger = self.hunger_complaint.map(HungerLevel::label).unwrap_or("");
        note.line("배고픔 호소", &join_present(&[hunger, self.custom_hunger.as_str()], ", "));
        note.line("식습관/식사시간", &self.eating_habits);

        note.symptoms("동반 증상", render_group(move |s: AppetiteSymptom| self.symptom(s)));
        note.other(&self.other);
        note.finish()
    }
}

impl ChartForm for AppetiteForm {
    const CONDITION: Condition = Condition::Appetite;

    fn catalog() -> FormCatalog {
        FormCatalog {
            condition: Self::CONDITION,
            header: Self::CONDITION.header(),
            text_fields: vec![
                FieldSpec { name: "mealAmount", label: "식사량" },
                FieldSpec { name: "hungerComplaint", label: "배고픔 호소 (없음/거의 없음/있음)" },
                FieldSpec { name: "customHunger", label: "배고픔 호소 세부사항" },
                FieldSpec { name: "eatingHabits", label: "식습관/식사시간" },
                FieldSpec { name: "other", label: "기타" },
            ],
            symptom_groups: vec![SymptomGroupSpec::of::<AppetiteSymptom, Presence>("동반 증상")],
        }
    }
}
