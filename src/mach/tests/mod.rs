use crate::mach::{Address, Event, Program, Runtime, DATA_SIZE};

fn runtime(s: &str) -> Runtime {
    Runtime::new(Program::from_bytes(s.as_bytes())).unwrap()
}

fn run(runtime: &mut Runtime, input: &[u8]) -> String {
    run_cycles(runtime, input, 5000)
}

fn run_cycles(runtime: &mut Runtime, input: &[u8], cycles: usize) -> String {
    let mut s = String::new();
    let mut input = input.iter().copied();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(byte) => {
                s.push(*byte as char);
            }
            Event::Input => {
                runtime.enter(input.next());
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

#[test]
fn test_increment_wraps() {
    let mut r = runtime(&"+".repeat(256));
    assert_eq!(run(&mut r, b""), "");
    assert_eq!(r.tape().get(), 0);
}

#[test]
fn test_decrement_wraps() {
    let mut r = runtime("-");
    run(&mut r, b"");
    assert_eq!(r.tape().get(), 255);
}

#[test]
fn test_pointer_wraps_left() {
    let mut r = runtime("<+");
    run(&mut r, b"");
    assert_eq!(r.tape().pointer(), (DATA_SIZE - 1) as Address);
    assert_eq!(r.tape().cell((DATA_SIZE - 1) as Address), 1);
}

#[test]
fn test_pointer_wraps_right() {
    let mut r = runtime(&">".repeat(DATA_SIZE));
    run_cycles(&mut r, b"", DATA_SIZE + 1);
    assert_eq!(r.tape().pointer(), 0);
}

#[test]
fn test_zero_loop_is_skipped() {
    let mut r = runtime("[+++]+");
    assert!(matches!(r.execute(1), Event::Running));
    assert_eq!(r.pc(), 5);
    run(&mut r, b"");
    assert_eq!(r.tape().get(), 1);
}

#[test]
fn test_loop_reenters_body() {
    let mut r = runtime("+++[->++<]");
    run(&mut r, b"");
    assert_eq!(r.tape().get(), 0);
    assert_eq!(r.tape().cell(1), 6);
}

#[test]
fn test_close_bracket_resumes_after_open() {
    let mut r = runtime("++[-]");
    assert!(matches!(r.execute(5), Event::Running));
    assert_eq!(r.pc(), 3);
    assert_eq!(r.tape().get(), 1);
    run(&mut r, b"");
    assert_eq!(r.pc(), 5);
    assert_eq!(r.tape().get(), 0);
}

#[test]
fn test_write() {
    let mut r = runtime("++++++++.");
    assert_eq!(run(&mut r, b""), "\u{8}");
}

#[test]
fn test_read_echo() {
    let mut r = runtime(",.");
    assert_eq!(run(&mut r, b"Q"), "Q");
}

#[test]
fn test_read_waits_for_enter() {
    let mut r = runtime(",+.");
    assert!(matches!(r.execute(10), Event::Input));
    assert!(matches!(r.execute(10), Event::Input));
    assert_eq!(r.pc(), 1);
    r.enter(Some(b'a'));
    assert!(matches!(r.execute(10), Event::Print(b'b')));
}

#[test]
fn test_read_end_of_input_keeps_cell() {
    let mut r = runtime("+++,.");
    assert_eq!(run(&mut r, b""), "\u{3}");
}

#[test]
fn test_comments_are_no_ops() {
    let mut r = runtime("add two: ++ then print it.");
    assert_eq!(run(&mut r, b""), "\u{2}");
}

#[test]
fn test_infinite_loop_keeps_running() {
    let mut r = runtime("+[]");
    assert_eq!(
        run_cycles(&mut r, b"", 100),
        "\n100 Execution cycles exceeded.\n"
    );
}

#[test]
fn test_empty_program_stops() {
    let mut r = runtime("");
    assert!(matches!(r.execute(1), Event::Stopped));
    assert_eq!(r.pc(), 0);
}
