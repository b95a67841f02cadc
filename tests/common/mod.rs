#![allow(dead_code)]
use bf::mach::{Event, Program, Runtime};

pub const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.";

pub fn runtime(s: &str) -> Runtime {
    Runtime::new(Program::from_bytes(s.as_bytes())).unwrap()
}

pub fn exec(runtime: &mut Runtime, input: &[u8]) -> Vec<u8> {
    exec_n(runtime, input, 5000)
}

pub fn exec_n(runtime: &mut Runtime, input: &[u8], cycles: usize) -> Vec<u8> {
    let mut s = Vec::new();
    let mut input = input.iter().copied();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.extend_from_slice(format!("?{}\n", error).as_bytes());
            }
            Event::Running => {
                if prev_running {
                    s.extend_from_slice(
                        format!("\n{} Execution cycles exceeded.\n", cycles).as_bytes(),
                    );
                    break;
                }
            }
            Event::Print(byte) => {
                s.push(*byte);
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
