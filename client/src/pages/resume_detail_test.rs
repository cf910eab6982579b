use super::*;

fn education(degree: Option<&str>, major: Option<&str>) -> Education {
    Education {
        school: "Tsinghua".to_owned(),
        degree: degree.map(str::to_owned),
        major: major.map(str::to_owned),
        start_date: None,
        end_date: None,
    }
}

// =============================================================================
// date_span
// =============================================================================

#[test]
fn date_span_covers_open_and_closed_ranges() {
    assert_eq!(date_span(None, None), None);
    assert_eq!(date_span(Some("2019"), None).as_deref(), Some("2019 – present"));
    assert_eq!(date_span(None, Some("2021")).as_deref(), Some("until 2021"));
    assert_eq!(date_span(Some("2019"), Some("2021")).as_deref(), Some("2019 – 2021"));
}

#[test]
fn date_span_ignores_blank_dates() {
    assert_eq!(date_span(Some("  "), Some("")), None);
}

// =============================================================================
// education_line / work_line
// =============================================================================

#[test]
fn education_line_joins_degree_and_major() {
    assert_eq!(education_line(&education(Some("BSc"), Some("Physics"))), "Tsinghua, BSc Physics");
    assert_eq!(education_line(&education(None, Some("Physics"))), "Tsinghua, Physics");
    assert_eq!(education_line(&education(None, None)), "Tsinghua");
}

#[test]
fn work_line_prefers_title_when_present() {
    let mut work = WorkExperience {
        company: "Acme".to_owned(),
        title: Some("Engineer".to_owned()),
        description: None,
        start_date: None,
        end_date: None,
    };
    assert_eq!(work_line(&work), "Engineer at Acme");
    work.title = Some(" ".to_owned());
    assert_eq!(work_line(&work), "Acme");
}
