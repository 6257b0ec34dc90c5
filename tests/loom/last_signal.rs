use faultline::signal::LastSignal;
use faultline::signal::RawSignal;
use faultline::signal::Severity;
use loom::sync::Arc;
use loom::thread;

fn signal(level: Severity, line: u32) -> RawSignal {
  RawSignal::new(level, "signal", "a.rs", line)
}

#[test]
fn concurrent_capture_keeps_one() {
  loom::model(|| {
    let slot: Arc<LastSignal> = Arc::new(LastSignal::new());

    let threads: Vec<_> = [Severity::WARNING, Severity::PARSE]
      .into_iter()
      .enumerate()
      .map(|(index, level)| {
        let slot: Arc<LastSignal> = Arc::clone(&slot);

        thread::spawn(move || {
          slot.capture(signal(level, index as u32));
        })
      })
      .collect();

    for handle in threads {
      handle.join().unwrap();
    }

    let last: RawSignal = slot.take().expect("one signal should remain");

    assert!(
      last.level() == Severity::WARNING || last.level() == Severity::PARSE,
      "unexpected level: {}",
      last.level(),
    );

    assert!(slot.take().is_none(), "take() must empty the slot");
  });
}

#[test]
fn take_races_capture() {
  loom::model(|| {
    let slot: Arc<LastSignal> = Arc::new(LastSignal::new());

    let writer = {
      let slot: Arc<LastSignal> = Arc::clone(&slot);

      thread::spawn(move || {
        slot.capture(signal(Severity::ERROR, 1));
      })
    };

    let taken: Option<RawSignal> = slot.take();

    writer.join().unwrap();

    let left: Option<RawSignal> = slot.take();

    // The signal is observed exactly once.
    assert!(taken.is_some() ^ left.is_some(), "signal lost or duplicated");
  });
}
