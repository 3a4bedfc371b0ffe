//! Growth (성장) form.

use super::{
    join_present, parse_status, render_group, ChartForm, FieldSpec, FormCatalog, FormFields,
    NoteBuilder, SymptomGroupSpec, SymptomKey,
};
use crate::{ChartError, ChartResult, Condition};
use pedichart_types::{Presence, SymptomEntry};
use serde::{Deserialize, Serialize};

/// Secondary sexual characteristics recorded on the growth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubertySign {
    Thelarche,
    Pubarche,
    Menarche,
    TesticularDevelopment,
}

impl SymptomKey for PubertySign {
    const ALL: &'static [Self] = &[
        PubertySign::Thelarche,
        PubertySign::Pubarche,
        PubertySign::Menarche,
        PubertySign::TesticularDevelopment,
    ];

    fn key(self) -> &'static str {
        match self {
            PubertySign::Thelarche => "thelarche",
            PubertySign::Pubarche => "pubarche",
            PubertySign::Menarche => "menarche",
            PubertySign::TesticularDevelopment => "testicularDevelopment",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PubertySign::Thelarche => "가슴멍울",
            PubertySign::Pubarche => "음모",
            PubertySign::Menarche => "초경",
            PubertySign::TesticularDevelopment => "고환",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthForm {
    /// Height gained over the last year, in cm; kept as typed.
    pub growth_last_year_num: String,
    pub growth_last_year_text: String,
    pub growth_history: String,
    pub thelarche: SymptomEntry<Presence>,
    pub pubarche: SymptomEntry<Presence>,
    pub menarche: SymptomEntry<Presence>,
    pub testicular_development: SymptomEntry<Presence>,
    pub father_growth_pattern: String,
    pub mother_growth_pattern: String,
    pub other: String,
}

impl GrowthForm {
    pub fn sign(&self, sign: PubertySign) -> &SymptomEntry<Presence> {
        match sign {
            PubertySign::Thelarche => &self.thelarche,
            PubertySign::Pubarche => &self.pubarche,
            PubertySign::Menarche => &self.menarche,
            PubertySign::TesticularDevelopment => &self.testicular_development,
        }
    }

    pub fn sign_mut(&mut self, sign: PubertySign) -> &mut SymptomEntry<Presence> {
        match sign {
            PubertySign::Thelarche => &mut self.thelarche,
            PubertySign::Pubarche => &mut self.pubarche,
            PubertySign::Menarche => &mut self.menarche,
            PubertySign::TesticularDevelopment => &mut self.testicular_development,
        }
    }

    fn lookup(sign: &str) -> ChartResult<PubertySign> {
        PubertySign::from_key(sign).ok_or_else(|| ChartError::UnknownSymptom {
            condition: Condition::Growth,
            symptom: sign.to_owned(),
        })
    }

    /// `<n>cm/yr`, then the free-text description.
    fn growth_last_year(&self) -> String {
        let rate = if self.growth_last_year_num.is_empty() {
            String::new()
        } else {
            format!("{}cm/yr", self.growth_last_year_num)
        };
        join_present(&[rate.as_str(), self.growth_last_year_text.as_str()], ", ")
    }

    /// `부(<father>) 모(<mother>)`, either half omitted when blank.
    fn parent_growth(&self) -> String {
        let father = if self.father_growth_pattern.is_empty() {
            String::new()
        } else {
            format!("부({})", self.father_growth_pattern)
        };
        let mother = if self.mother_growth_pattern.is_empty() {
            String::new()
        } else {
            format!("모({})", self.mother_growth_pattern)
        };
        join_present(&[father.as_str(), mother.as_str()], " ")
    }
}

impl FormFields for GrowthForm {
    fn condition(&self) -> Condition {
        Condition::Growth
    }

    fn set_text(&mut self, field: &str, value: String) -> ChartResult<()> {
        let slot = match field {
            "growthLastYearNum" => &mut self.growth_last_year_num,
            "growthLastYearText" => &mut self.growth_last_year_text,
            "growthHistory" => &mut self.growth_history,
            "fatherGrowthPattern" => &mut self.father_growth_pattern,
            "motherGrowthPattern" => &mut self.mother_growth_pattern,
            "other" => &mut self.other,
            _ => {
                return Err(ChartError::UnknownField {
                    condition: Condition::Growth,
                    field: field.to_owned(),
                })
            }
        };
        *slot = value;
        Ok(())
    }

    fn toggle(&mut self, symptom: &str, status: &str) -> ChartResult<()> {
        let sign = Self::lookup(symptom)?;
        let status = parse_status::<Presence>(symptom, status)?;
        self.sign_mut(sign).toggle(status);
        Ok(())
    }

    fn set_detail(&mut self, symptom: &str, detail: String) -> ChartResult<()> {
        let sign = Self::lookup(symptom)?;
        self.sign_mut(sign).set_detail(detail);
        Ok(())
    }

    fn assemble(&self) -> String {
        let mut note = NoteBuilder::new(Condition::Growth);
        note.line("최근 1년 키 성장", &self.growth_last_year());
        note.line("성장 관련 진료", &self.growth_history);
        note.symptoms("2차 성징", render_group(move |s: PubertySign| self.sign(s)));
        note.line("부모 성장 패턴", &self.parent_growth());
        note.other(&self.other);
        note.finish()
    }
}

impl ChartForm for GrowthForm {
    const CONDITION: Condition = Condition::Growth;

    fn catalog() -> FormCatalog {
        FormCatalog {
            condition: Self::CONDITION,
            header: Self::CONDITION.header(),
            text_fields: vec![
                FieldSpec { name: "growthLastYearNum", label: "최근 1년 키 성장 (cm/yr)" },
                FieldSpec { name: "growthLastYearText", label: "최근 1년 키 성장 (서술형)" },
                FieldSpec { name: "growthHistory", label: "성장 관련 진료" },
                FieldSpec { name: "fatherGrowthPattern", label: "부 (Father)" },
                FieldSpec { name: "motherGrowthPattern", label: "모 (Mother)" },
                FieldSpec { name: "other", label: "기타" },
            ],
            symptom_groups: vec![SymptomGroupSpec::of::<PubertySign, Presence>("2차 성징")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_renders_nothing() {
        assert_eq!(GrowthForm::default().assemble(), "");
    }

    #[test]
    fn growth_rate_unit_follows_number_only() {
        let mut form = GrowthForm::default();
        form.set_text("growthLastYearText", "작년보다 덜 큼".into()).unwrap();
        assert_eq!(form.assemble(), "#성장\n-최근 1년 키 성장 : 작년보다 덜 큼");

        form.set_text("growthLastYearNum", "4".into()).unwrap();
        assert_eq!(form.assemble(), "#성장\n-최근 1년 키 성장 : 4cm/yr, 작년보다 덜 큼");
    }

    #[test]
    fn parents_are_joined_with_a_space() {
        let mut form = GrowthForm::default();
        form.set_text("motherGrowthPattern", "초6때 초경".into()).unwrap();
        assert_eq!(form.assemble(), "#성장\n-부모 성장 패턴 : 모(초6때 초경)");

        form.set_text("fatherGrowthPattern", "고1때 10cm 큼".into()).unwrap();
        assert_eq!(
            form.assemble(),
            "#성장\n-부모 성장 패턴 : 부(고1때 10cm 큼) 모(초6때 초경)"
        );
    }

    #[test]
    fn full_form_line_order() {
        let mut form = GrowthForm::default();
        form.set_text("other", "뼈나이 검사 예정".into()).unwrap();
        form.set_text("fatherGrowthPattern", "늦게 큼".into()).unwrap();
        form.toggle("menarche", "-").unwrap();
        form.toggle("thelarche", "+").unwrap();
        form.set_detail("thelarche", "6개월 전".into()).unwrap();
        form.set_text("growthHistory", "성장클리닉 진료".into()).unwrap();
        form.set_text("growthLastYearNum", "5".into()).unwrap();

        assert_eq!(
            form.assemble(),
            "#성장\n-최근 1년 키 성장 : 5cm/yr\n-성장 관련 진료 : 성장클리닉 진료\n-2차 성징 : 가슴멍울(+, 6개월 전) 초경(-)\n-부모 성장 패턴 : 부(늦게 큼)\n+ 뼈나이 검사 예정"
        );
    }

    #[test]
    fn severe_grade_is_not_offered() {
        let mut form = GrowthForm::default();
        let err = form.toggle("pubarche", "++").unwrap_err();
        assert!(matches!(err, ChartError::InvalidStatus { .. }));
    }

    #[test]
    fn detail_is_inert_until_status_set() {
        let mut form = GrowthForm::default();
        form.set_detail("testicularDevelopment", "4ml".into()).unwrap();
        assert_eq!(form.assemble(), "");

        form.toggle("testicularDevelopment", "+").unwrap();
        assert_eq!(form.assemble(), "#성장\n-2차 성징 : 고환(+, 4ml)");
    }
}
