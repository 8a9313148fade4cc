use chrono::NaiveDate;
use horario::core::schedule::{DayField, set_day_field};
use horario::export::report::{default_file_name, format_report};
use horario::models::ScheduleRecord;
use horario::utils::time::parse_time;

#[test]
fn test_empty_record_renders_header_only() {
    let record = ScheduleRecord::new("Juan Pérez", 3, 2025);
    let report = format_report(&record);

    assert!(report.starts_with("HORARIO LABORAL\n================\n\n"));
    assert!(report.contains("Trabajador: Juan Pérez\n"));
    assert!(report.contains("Período: Marzo 2025\n"));
    assert!(report.ends_with("REGISTRO DE HORARIOS:\n--------------------\n"));
    assert!(!report.contains("Entrada:"));
}

#[test]
fn test_full_day_block_layout() {
    let mut record = ScheduleRecord::new("Juan Pérez", 3, 2025);
    let d = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    set_day_field(&mut record, d, DayField::Entry(parse_time("09:00")));
    set_day_field(&mut record, d, DayField::Exit(parse_time("17:30")));
    set_day_field(&mut record, d, DayField::Notes("reunión larga".into()));

    let report = format_report(&record);
    let expected_block = concat!(
        "Miércoles 5:\n",
        "  Entrada: 09:00\n",
        "  Salida: 17:30\n",
        "  Horas trabajadas: 8:30\n",
        "  Incidencias: reunión larga\n",
        "\n",
    );
    assert!(report.ends_with(expected_block));
}

#[test]
fn test_missing_times_use_sentinels() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);
    let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    set_day_field(&mut record, d, DayField::Entry(parse_time("10:00")));

    let report = format_report(&record);
    assert!(report.contains("  Entrada: 10:00\n"));
    assert!(report.contains("  Salida: No registrada\n"));
    assert!(report.contains("  Horas trabajadas: 0:00\n"));
    assert!(!report.contains("Incidencias:"));
}

#[test]
fn test_day_blocks_are_chronological() {
    let mut record = ScheduleRecord::new("Ana", 3, 2025);
    for day in [20, 3, 11] {
        let d = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        set_day_field(&mut record, d, DayField::Entry(parse_time("08:00")));
    }

    let report = format_report(&record);
    let p3 = report.find("Lunes 3:").expect("day 3 present");
    let p11 = report.find("Martes 11:").expect("day 11 present");
    let p20 = report.find("Jueves 20:").expect("day 20 present");
    assert!(p3 < p11 && p11 < p20);
}

#[test]
fn test_default_file_name_matches_storage_key() {
    let record = ScheduleRecord::new("Juan Pérez", 3, 2025);
    assert_eq!(default_file_name(&record), "horario_Juan_Pérez_2025_3.txt");
}
