use ocrclean::application::services::simple_correct;

#[test]
fn given_ligature_confusions_when_simple_correcting_then_replaced_in_order() {
    assert_eq!(simple_correct("the rnodern wor1d"), "the modem world");
}

#[test]
fn given_double_v_when_simple_correcting_then_becomes_w() {
    assert_eq!(simple_correct("vvhen"), "when");
}

#[test]
fn given_digit_between_letters_when_simple_correcting_then_letter_restored() {
    assert_eq!(simple_correct("g0od ti1e"), "good tile");
}

#[test]
fn given_lowercase_determiner_artifact_when_simple_correcting_then_becomes_the() {
    assert_eq!(simple_correct("on tlle mat"), "on the mat");
}

#[test]
fn given_space_before_punctuation_when_simple_correcting_then_removed() {
    assert_eq!(simple_correct("  hello   world , again .  "), "hello world, again.");
}

#[test]
fn given_non_english_text_when_simple_correcting_then_produces_output() {
    assert_eq!(simple_correct("日本語 のテキスト"), "日本語 のテキスト");
}
