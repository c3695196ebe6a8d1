use simspad_cli::io::csv_signal::{read_stimulus, write_signal};
use simspad_core::Channels;

#[test]
fn reads_single_channel_stimulus() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.csv");
    std::fs::write(&path, "time, photons\n0, 10\n1e-11, 10\n2e-11, 12.5\n").unwrap();

    let s = read_stimulus(path.to_str().unwrap()).unwrap();
    assert_eq!(s.channels, Channels::Single(vec![10.0, 10.0, 12.5]));
    assert!((s.dt().unwrap() - 1e-11).abs() < 1e-24);
}

#[test]
fn reads_dual_channel_stimulus() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.csv");
    std::fs::write(&path, "time,ch1,ch2\n0,1,4\n1,2,5\n2,3,6\n").unwrap();

    let s = read_stimulus(path.to_str().unwrap()).unwrap();
    assert_eq!(s.channels, Channels::Dual(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]));
    assert_eq!(s.dt(), Some(1.0));
}

#[test]
fn rejects_bad_numbers_and_ragged_rows() {
    let dir = tempfile::tempdir().unwrap();

    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, "time,photons\n0,ten\n").unwrap();
    let err = read_stimulus(bad.to_str().unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("not a number"));

    let ragged = dir.path().join("ragged.csv");
    std::fs::write(&ragged, "time,photons\n0,1\n1,2,3\n").unwrap();
    assert!(read_stimulus(ragged.to_str().unwrap()).is_err());

    let wide = dir.path().join("wide.csv");
    std::fs::write(&wide, "a,b,c,d\n0,1,2,3\n").unwrap();
    assert!(read_stimulus(wide.to_str().unwrap()).is_err());
}

#[test]
fn writes_time_axis_from_dt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_signal(path.to_str().unwrap(), 0.5, &Channels::Single(vec![3.0, 4.0, 5.0])).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["time,qOut", "0,3", "0.5,4", "1,5"]);
}
