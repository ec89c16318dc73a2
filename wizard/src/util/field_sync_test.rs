use super::*;

#[test]
fn sanitize_digits_strips_everything_else() {
    assert_eq!(sanitize_digits("₹1,23,456"), "123456");
    assert_eq!(sanitize_digits("12.5k"), "125");
    assert_eq!(sanitize_digits("abc"), "");
}

#[test]
fn slider_updates_text_and_label_for_money_pair() {
    let update = from_slider(PairId::ApplicantIncome, "75000");
    assert_eq!(update.slider, 75000.0);
    assert_eq!(update.text.as_deref(), Some("75000"));
    assert_eq!(update.label, "₹75,000");
    assert_eq!(update.field_value, "75000");
}

#[test]
fn slider_updates_label_for_experience_and_rate() {
    let exp = from_slider(PairId::Experience, "4.5");
    assert_eq!(exp.text, None);
    assert_eq!(exp.label, "4.5 years");
    assert_eq!(exp.field_value, "4.5");

    let rate = from_slider(PairId::InterestRate, "9");
    assert_eq!(rate.label, "9.0%");
    assert_eq!(rate.field_value, "9");
}

#[test]
fn text_edit_is_sanitized_before_propagating() {
    let update = from_text(PairId::LoanAmount, "12,00,000 rs");
    assert_eq!(update.text.as_deref(), Some("1200000"));
    assert_eq!(update.slider, 1_200_000.0);
    assert_eq!(update.label, "₹12,00,000");
    assert_eq!(update.field_value, "1200000");
}

#[test]
fn text_edit_empty_becomes_zero() {
    let update = from_text(PairId::ApplicantIncome, "abc");
    assert_eq!(update.text.as_deref(), Some("0"));
    assert_eq!(update.slider, 0.0);
    assert_eq!(update.label, "₹0");
}

#[test]
fn text_edit_beyond_range_clamps_slider_only() {
    let update = from_text(PairId::ApplicantIncome, "900000");
    assert_eq!(update.slider, 500_000.0);
    assert_eq!(update.text.as_deref(), Some("900000"));
    assert_eq!(update.label, "₹9,00,000");
}

#[test]
fn text_edit_overlong_digits_keep_text_and_label_in_step() {
    let update = from_text(PairId::LoanAmount, &"9".repeat(400));
    let text = update.text.clone().unwrap_or_default();
    assert_eq!(text.len(), MAX_TEXT_DIGITS);
    assert_eq!(update.label, format!("₹{}", crate::util::money::group_indian(&text)));
    assert_eq!(update.field_value, text);
    assert_eq!(update.slider, 10_000_000.0);
}

#[test]
fn slider_and_text_agree_across_the_range() {
    for pair in [PairId::ApplicantIncome, PairId::LoanAmount] {
        let range = pair.range();
        let mut value = range.min;
        while value <= range.max {
            let raw = plain_number(value);
            let by_slider = from_slider(pair, &raw);
            let by_text = from_text(pair, &raw);
            assert_eq!(by_slider.slider, value);
            assert_eq!(by_slider, by_text, "{pair:?} at {raw}");
            value += range.step * 37.0;
        }
    }
}

#[test]
fn slider_garbage_falls_back_to_minimum() {
    let update = from_slider(PairId::InterestRate, "");
    assert_eq!(update.slider, 5.0);
    assert_eq!(update.label, "5.0%");
}

#[test]
fn initial_pairs_start_at_their_defaults() {
    let income = initial(PairId::ApplicantIncome);
    assert_eq!(income.slider, 50_000.0);
    assert_eq!(income.label, "₹50,000");
    let exp = initial(PairId::Experience);
    assert_eq!(exp.label, "2.0 years");
}
