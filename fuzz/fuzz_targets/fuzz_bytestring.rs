#![no_main]

//! Model-based fuzzing: apply an arbitrary sequence of operations to a
//! `ByteString` and to a plain `Vec<u8>` reference model, then assert that
//! every observation agrees. Zero-copy slicing, trimming construction, and
//! the raw primitives all funnel through here.

use arbitrary::Arbitrary;
use bytespan::{Buffer, ByteString, construct, raw};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Slice { start: u16, len: u16 },
    SplitAt { at: u16 },
    Reverse,
    Intersperse { sep: u8 },
    TrimStart,
    TrimEnd,
    ConcatSelf,
}

#[derive(Arbitrary, Debug)]
struct Plan {
    seed: Vec<u8>,
    trim_to: u16,
    ops: Vec<Op>,
}

fn check(s: &ByteString, model: &[u8]) {
    assert_eq!(s.len(), model.len());
    assert_eq!(s.as_bytes(), model);
    for target in [0u8, b' ', 0xFF, model.first().copied().unwrap_or(1)] {
        assert_eq!(s.find_byte(target), raw::find_byte(model, target));
        assert_eq!(s.count(target), raw::count(model, target));
    }
    assert_eq!(s.maximum(), model.iter().copied().max());
    assert_eq!(s.minimum(), model.iter().copied().min());
}

fuzz_target!(|plan: Plan| {
    // Build through the trimming primitive so the construction path is
    // exercised with both exact and pessimistic bounds.
    let used = (plan.trim_to as usize).min(plan.seed.len());
    let mut model = plan.seed[..used].to_vec();
    let mut s = construct::create_and_trim(plan.seed.len(), |dst| {
        raw::copy(dst, &plan.seed);
        used
    });
    check(&s, &model);

    // Round-trip through the buffer-view boundary.
    let (buf, offset, len) = s.buffer_view();
    let reattached = ByteString::from_buffer(buf.clone(), offset, len).expect("view is in bounds");
    assert_eq!(reattached, s);
    assert!(ByteString::from_buffer(Buffer::from_vec(model.clone()), 1, model.len()).is_err());

    for op in plan.ops {
        match op {
            Op::Slice { start, len } => {
                let start = (start as usize) % (s.len() + 1);
                let len = (len as usize) % (s.len() - start + 1);
                s = s.slice(start..start + len);
                model = model[start..start + len].to_vec();
            }
            Op::SplitAt { at } => {
                let at = (at as usize) % (s.len() + 1);
                let (head, tail) = s.split_at(at);
                check(&head, &model[..at]);
                s = tail;
                model = model[at..].to_vec();
            }
            Op::Reverse => {
                s = s.reversed();
                model.reverse();
            }
            Op::Intersperse { sep } => {
                s = s.intersperse(sep);
                if !model.is_empty() {
                    let mut out = Vec::with_capacity(2 * model.len() - 1);
                    for (i, &b) in model.iter().enumerate() {
                        if i > 0 {
                            out.push(sep);
                        }
                        out.push(b);
                    }
                    model = out;
                }
            }
            Op::TrimStart => {
                s = s.trim_start_spaces();
                let skip = model
                    .iter()
                    .take_while(|&&b| bytespan::latin1::is_space(b))
                    .count();
                model = model[skip..].to_vec();
            }
            Op::TrimEnd => {
                s = s.trim_end_spaces();
                let keep = model.len()
                    - model
                        .iter()
                        .rev()
                        .take_while(|&&b| bytespan::latin1::is_space(b))
                        .count();
                model.truncate(keep);
            }
            Op::ConcatSelf => {
                if model.len() > 4096 {
                    continue;
                }
                s = ByteString::concat(&[s.clone(), s.clone()]);
                let doubled: Vec<u8> = model.iter().chain(model.iter()).copied().collect();
                model = doubled;
            }
        }
        check(&s, &model);
    }
});
