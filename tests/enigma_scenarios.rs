//! End-to-end scenarios against known M4 Enigma traffic.

use rotorsim::checkpoint::Checkpoint;
use rotorsim::cli::{self, Args};
use rotorsim::config;
use rotorsim::session::Session;
use std::fs;

const CONFIG: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ
 5 3
 I MQ      (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
 II ME     (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
 III MV    (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
 IV MJ     (AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)
 Beta N    (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
 B R       (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP)
           (RX) (SZ) (TV)
 C R       (AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW)
           (QZ) (SX) (UY)
";

const PLAIN: &str = "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)
FROM his shoulder Hiawatha
Took the camera of rosewood
Made of sliding folding rosewood
Neatly put it all together

In its case it lay compactly
";

const CIPHER: &str = "QVPQS OKOIL PUBKJ ZPISF XDW
BHCNS CXNUO AATZX SRCFY DGU
FLPNX GXIXT YJUJR CAUGE UNCFM KUF
WJFGK CIIRG XODJG VCGPQ OH

ALWEB UHTZM OXIIV XUEFP RPR
";

fn run(input: &str) -> String {
    let mut session = Session::new(config::load(CONFIG).unwrap(), Vec::new());
    session.run(input.as_bytes()).unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn single_keypress_with_plugboard() {
    let mut machine = config::load(CONFIG).unwrap();
    machine.insert_rotors(&["B", "Beta", "III", "IV", "I"]).unwrap();
    machine.set_rotors("AXLE").unwrap();
    machine
        .set_plugboard(
            rotorsim::Permutation::new("(YF) (ZH)", machine.alphabet().clone()).unwrap(),
        )
        .unwrap();

    let z = machine.alphabet().to_index('Z').unwrap();
    assert_eq!(machine.convert_index(24).unwrap(), z);
}

#[test]
fn encrypts_known_message() {
    assert_eq!(run(PLAIN), CIPHER);
}

#[test]
fn decrypts_known_message() {
    let cipher = format!(
        "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)\n{}",
        CIPHER.trim_end()
    );
    let output = run(&cipher);
    let expected = "FROMH ISSHO ULDER HIAWA THA
TOOKT HECAM ERAOF ROSEW OOD
MADEO FSLID INGFO LDING ROSEW OOD
NEATL YPUTI TALLT OGETH ER

INITS CASEI TLAYC OMPAC TLY
";
    assert_eq!(output, expected);
}

#[test]
fn resumes_from_checkpoint_mid_stream() {
    let mut machine = config::load(CONFIG).unwrap();
    let mut session = Session::new(machine.clone(), Vec::new());
    session
        .run("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)\nFROM his shoulder\n".as_bytes())
        .unwrap();

    let saved = Checkpoint::capture(session.machine()).unwrap().to_json().unwrap();
    Checkpoint::from_json(&saved)
        .unwrap()
        .restore(&mut machine)
        .unwrap();

    assert_eq!(machine.convert("Hiawatha").unwrap(), "ZPISFXDW");
}

#[test]
fn cli_reads_and_writes_files() {
    let dir = std::env::temp_dir().join(format!("rotorsim-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let conf = dir.join("default.conf");
    let input = dir.join("message.in");
    let output = dir.join("message.out");
    fs::write(&conf, CONFIG).unwrap();
    fs::write(&input, PLAIN).unwrap();

    let args = Args::from_args(&[
        conf.display().to_string(),
        input.display().to_string(),
        output.display().to_string(),
    ])
    .unwrap();
    cli::run(&args).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("QVPQS OKOIL PUBKJ ZPISF XDW\n"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_keeps_output_written_before_an_error() {
    let dir = std::env::temp_dir().join(format!("rotorsim-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let conf = dir.join("default.conf");
    let input = dir.join("message.in");
    let output = dir.join("message.out");
    fs::write(&conf, CONFIG).unwrap();
    fs::write(
        &input,
        "* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)\nFROM\n* B Beta III IV I AXL\nQVPQ\n",
    )
    .unwrap();

    let args = Args::from_args(&[
        conf.display().to_string(),
        input.display().to_string(),
        output.display().to_string(),
    ])
    .unwrap();
    assert!(cli::run(&args).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "QVPQ\n");
    fs::remove_dir_all(&dir).unwrap();
}
