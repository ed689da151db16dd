use super::*;

#[test]
fn absent_value_renders_empty() {
    assert_eq!(format_date(None, DEFAULT_FORMAT), "");
    assert_eq!(format_relative_time(None), "");
}

#[test]
fn unparseable_text_renders_empty() {
    let bad = DateValue::Text("not-a-date".to_owned());
    assert_eq!(format_date(Some(&bad), DEFAULT_FORMAT), "");
}

#[test]
fn epoch_millis_render_in_local_time() {
    let expected = Local
        .timestamp_millis_opt(0)
        .single()
        .expect("epoch")
        .format("%Y-%m-%d")
        .to_string();
    assert_eq!(format_date(Some(&DateValue::Millis(0)), "YYYY-MM-DD"), expected);
}

#[test]
fn substitutes_all_tokens_zero_padded() {
    // 2024-03-05 07:08:09 local time.
    let naive = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(7, 8, 9))
        .expect("fixture");
    let local = Local.from_local_datetime(&naive).single().expect("fixture");
    let value = DateValue::Millis(local.timestamp_millis());
    assert_eq!(
        format_date(Some(&value), DEFAULT_FORMAT),
        "2024-03-05 07:08:09"
    );
}

#[test]
fn parses_common_backend_text_formats() {
    assert_eq!(
        format_date(Some(&DateValue::Text("2024-03-05 07:08:09".to_owned())), "YYYY/MM/DD"),
        "2024/03/05"
    );
    assert_eq!(
        format_date(Some(&DateValue::Text("2024-03-05".to_owned())), "HH:mm:ss"),
        "00:00:00"
    );
}

#[test]
fn relative_time_buckets() {
    let naive = NaiveDate::from_ymd_opt(2024, 6, 15)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("fixture");
    let now = Local.from_local_datetime(&naive).single().expect("fixture");
    let at = |seconds_ago: i64| {
        Some(DateValue::Millis(now.timestamp_millis() - seconds_ago * 1000))
    };

    assert_eq!(format_relative_time_at(at(30).as_ref(), now), "刚刚");
    assert_eq!(format_relative_time_at(at(5 * 60).as_ref(), now), "5分钟前");
    assert_eq!(format_relative_time_at(at(3 * 3600).as_ref(), now), "3小时前");
    assert_eq!(format_relative_time_at(at(2 * 86_400).as_ref(), now), "2天前");
    assert_eq!(format_relative_time_at(at(10 * 86_400).as_ref(), now), "1周前");
    assert_eq!(format_relative_time_at(at(60 * 86_400).as_ref(), now), "2024-04-16");
}
