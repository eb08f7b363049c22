#![no_main]

use libfuzzer_sys::fuzz_target;

use practice_lib::app::{execute, Program};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, input)) = data.split_first() else {
        return;
    };
    let program = match selector % 4 {
        0 => Program::Fibonacci,
        1 => Program::Grade,
        2 => Program::Palindrome,
        _ => Program::Interest,
    };

    // Any stdin either completes or reports an input error; it must not panic.
    let mut out = Vec::new();
    let _ = execute(program, input, &mut out);
});
