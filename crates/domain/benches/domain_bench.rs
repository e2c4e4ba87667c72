use criterion::{Criterion, criterion_group, criterion_main};
use domain::{PriceSchedule, TicketCategory, TicketTally, TicketTypeRequest};

fn purchase_lines() -> Vec<TicketTypeRequest> {
    let mut lines = Vec::new();
    for _ in 0..4 {
        lines.push(TicketTypeRequest::for_category(TicketCategory::Adult, 2));
        lines.push(TicketTypeRequest::for_category(TicketCategory::Child, 1));
        lines.push(TicketTypeRequest::for_category(TicketCategory::Infant, 1));
    }
    lines
}

fn bench_tally_requests(c: &mut Criterion) {
    let requests = purchase_lines();

    c.bench_function("domain/tally_requests", |b| {
        b.iter(|| TicketTally::from_requests(&requests).unwrap());
    });
}

fn bench_limit_checks(c: &mut Criterion) {
    let requests = purchase_lines();
    let tally = TicketTally::from_requests(&requests).unwrap();

    c.bench_function("domain/check_limits", |b| {
        b.iter(|| tally.check_limits().unwrap());
    });
}

fn bench_total_cost(c: &mut Criterion) {
    let requests = purchase_lines();
    let tally = TicketTally::from_requests(&requests).unwrap();
    let prices = PriceSchedule::default();

    c.bench_function("domain/total_cost", |b| {
        b.iter(|| prices.total_cost(&tally));
    });
}

criterion_group!(
    benches,
    bench_tally_requests,
    bench_limit_checks,
    bench_total_cost
);
criterion_main!(benches);
