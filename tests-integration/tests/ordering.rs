//! Integration tests verifying that drain order matches push order.

use rand::Rng;

use recdeq::{Key, Record, RecordQueue, Timestamp};

fn random_record(rng: &mut impl Rng) -> Record {
	Record::new(Key::new(rng.gen()), Timestamp::new(rng.gen()))
}

#[test]
fn drain_order_matches_push_order() {
	let mut rng = rand::thread_rng();
	let records: Vec<Record> =
		(0..256).map(|_| random_record(&mut rng)).collect();

	let mut queue = RecordQueue::new();
	for &record in &records {
		queue.push_front(record).unwrap();
	}
	assert_eq!(queue.len(), records.len());

	// Repeated back-removal yields records in the order they were pushed.
	for &expected in &records {
		assert_eq!(queue.peek_back(), Some(expected));
		assert_eq!(queue.pop_back(), Some(expected));
	}
	assert!(queue.is_empty());
}

#[test]
fn queue_is_nonempty_iff_pushes_exceed_pops() {
	let mut rng = rand::thread_rng();

	for n in 0..8_usize {
		for m in 0..=n {
			let mut queue = RecordQueue::new();

			for _ in 0..n {
				queue.push_front(random_record(&mut rng)).unwrap();
			}
			for _ in 0..m {
				assert!(queue.pop_back().is_some());
			}

			assert_eq!(queue.is_empty(), n == m, "n={n} m={m}");
			assert_eq!(queue.len(), n - m, "n={n} m={m}");
		}
	}
}

#[test]
fn interleaved_pushes_and_pops_preserve_order() {
	let mut rng = rand::thread_rng();
	let records: Vec<Record> =
		(0..64).map(|_| random_record(&mut rng)).collect();

	let mut queue = RecordQueue::new();
	let mut drained = Vec::new();

	// Push two, pop one, until the input runs out; then drain.
	for pair in records.chunks(2) {
		for &record in pair {
			queue.push_front(record).unwrap();
		}
		drained.extend(queue.pop_back());
	}
	while let Some(record) = queue.pop_back() {
		drained.push(record);
	}

	assert_eq!(drained, records);
}

#[test]
fn statistics_track_lifetime_totals() {
	let mut rng = rand::thread_rng();
	let mut queue = RecordQueue::new();

	for _ in 0..10 {
		queue.push_front(random_record(&mut rng)).unwrap();
	}
	for _ in 0..4 {
		assert!(queue.pop_back().is_some());
	}
	// Pops on an empty queue are not counted.
	for _ in 0..8 {
		let _ = queue.pop_back();
	}

	assert_eq!(queue.statistics().total_pushed(), 10);
	assert_eq!(queue.statistics().total_popped(), 10);
	assert!(queue.is_empty());
}
