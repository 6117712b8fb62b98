use rand::rngs::StdRng;
use rand::SeedableRng;

use seatplan::prelude::*;

use crate::fixtures::{
    exam_hall_a, exam_hall_b, mixed_roster, ordered_allocator, sorted_rolls, student,
    two_class_roster,
};


fn grid(row: u32, col: u32) -> DeskId {
    DeskId::Grid { row, col }
}

#[test]
fn same_class_pair_cannot_share_the_only_desk() {
    let students = vec![student("9A001", "9A", "male"), student("9A002", "9A", "female")];
    let rooms = [Room::new("SINGLE", 1, 1, 0)];

    let allocation = ordered_allocator().allocate(students, &rooms).unwrap();

    assert_eq!(allocation.seated_count(), 1);
    assert_eq!(allocation.unassigned, vec![student("9A002", "9A", "female")]);

    let desk = &allocation.plan.rooms["SINGLE"].desks[&grid(1, 1)];
    assert_eq!(desk.seat_a.as_ref().unwrap().roll_number, "9A001");
    assert!(desk.seat_b.is_none());
    assert!(validate_plan(&allocation.plan).is_empty());
}

#[test]
fn adjacent_desks_limit_two_classes_to_one_student_each() {
    fixtures::init_debug_logger();

    // In a 2x1 grid both desks are adjacent, so with two classes only one
    // student of each can be seated at all.
    let students = vec![
        student("9A001", "9A", "male"),
        student("9A002", "9A", "female"),
        student("9B001", "9B", "male"),
        student("9B002", "9B", "female"),
    ];
    let rooms = [Room::new("MAIN", 2, 1, 0)];

    let allocation = ordered_allocator().allocate(students, &rooms).unwrap();

    let desks = &allocation.plan.rooms["MAIN"].desks;
    assert_eq!(desks[&grid(1, 1)].seat_a.as_ref().unwrap().roll_number, "9A001");
    assert_eq!(desks[&grid(1, 1)].seat_b.as_ref().unwrap().roll_number, "9B001");
    assert!(desks[&grid(2, 1)].seat_a.is_none());
    assert!(desks[&grid(2, 1)].seat_b.is_none());

    // The remainder keeps the input order.
    assert_eq!(
        sorted_rolls(&allocation.unassigned),
        vec!["9A002", "9B002"]
    );
    assert_eq!(allocation.unassigned[0].roll_number, "9A002");
    assert!(validate_plan(&allocation.plan).is_empty());
}

#[test]
fn extra_desks_have_no_adjacency() {
    // Same-desk exclusivity still applies on extra desks, but two same-class
    // students on two different extra desks are legal.
    let students = vec![student("12C001", "12C", "male"), student("12C002", "12C", "male")];
    let rooms = [Room::new("ANNEX", 0, 0, 2)];

    let allocation = ordered_allocator().allocate(students, &rooms).unwrap();

    assert_eq!(allocation.seated_count(), 2);
    assert!(allocation.unassigned.is_empty());

    let desks = &allocation.plan.rooms["ANNEX"].desks;
    let first = &desks[&DeskId::Extra { index: 1 }];
    let second = &desks[&DeskId::Extra { index: 2 }];
    assert_eq!(first.seat_a.as_ref().unwrap().roll_number, "12C001");
    assert!(first.seat_b.is_none());
    assert_eq!(second.seat_a.as_ref().unwrap().roll_number, "12C002");
    assert!(validate_plan(&allocation.plan).is_empty());
}

#[test]
fn no_student_is_duplicated_or_lost() {
    let roster = two_class_roster(12);
    let input_rolls = sorted_rolls(&roster);
    let rooms = [exam_hall_a(), exam_hall_b()];

    let allocation = SeatAllocator::new(PlanPolicy::new())
        .allocate_with_rng(roster, &rooms, &mut StdRng::seed_from_u64(7))
        .unwrap();

    let mut output_rolls: Vec<String> = allocation
        .plan
        .students()
        .chain(&allocation.unassigned)
        .map(|student| student.roll_number.clone())
        .collect();
    output_rolls.sort();

    assert_eq!(output_rolls, input_rolls);
}

#[test]
fn allocator_output_passes_the_audit() {
    fixtures::init_debug_logger();

    let roster = mixed_roster(&["10A", "10B", "11A", "11B"], 15);
    let rooms = [exam_hall_a(), exam_hall_b()];

    let allocation = SeatAllocator::new(PlanPolicy::new())
        .allocate_with_rng(roster, &rooms, &mut StdRng::seed_from_u64(42))
        .unwrap();

    let violations = validate_plan(&allocation.plan);
    assert!(
        violations.is_empty(),
        "allocator produced an invalid plan: {}",
        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    );
}

#[test]
fn room_capacity_is_never_exceeded() {
    let roster = two_class_roster(40);
    let total = roster.len();
    let rooms = [Room::new("TIGHT", 2, 2, 1)];

    let allocation = ordered_allocator().allocate(roster, &rooms).unwrap();

    for (room_id, room_plan) in &allocation.plan.rooms {
        let room = rooms.iter().find(|r| &r.room_id == room_id).unwrap();
        assert!(room_plan.seated_count() <= room.capacity());
    }
    assert_eq!(allocation.seated_count() + allocation.unassigned.len(), total);
}

#[test]
fn allocation_is_deterministic_without_random_order() {
    let roster = mixed_roster(&["10A", "10B", "11A"], 10);
    let rooms = [exam_hall_a(), exam_hall_b()];

    let first = ordered_allocator().allocate(roster.clone(), &rooms).unwrap();
    let second = ordered_allocator().allocate(roster, &rooms).unwrap();

    assert_eq!(first, second);
}

#[test]
fn allocation_is_deterministic_with_a_fixed_seed() {
    let roster = mixed_roster(&["10A", "10B", "11A"], 10);
    let rooms = [exam_hall_a()];
    let allocator = SeatAllocator::new(PlanPolicy::new());

    let first = allocator
        .allocate_with_rng(roster.clone(), &rooms, &mut StdRng::seed_from_u64(1234))
        .unwrap();
    let second = allocator
        .allocate_with_rng(roster, &rooms, &mut StdRng::seed_from_u64(1234))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn desks_fill_row_major_with_extras_last() {
    // Ten students of ten distinct classes: nothing constrains placement, so
    // the traversal order alone decides who sits where.
    let roster: Vec<Student> = (1..=10)
        .map(|i| student(&format!("S{i:02}"), &format!("C{i:02}"), "male"))
        .collect();
    let rooms = [Room::new("ORDERED", 2, 2, 1)];

    let allocation = ordered_allocator().allocate(roster, &rooms).unwrap();
    let desks = &allocation.plan.rooms["ORDERED"].desks;

    assert_eq!(desks[&grid(1, 1)].seat_a.as_ref().unwrap().roll_number, "S01");
    assert_eq!(desks[&grid(1, 1)].seat_b.as_ref().unwrap().roll_number, "S02");
    assert_eq!(desks[&grid(1, 2)].seat_a.as_ref().unwrap().roll_number, "S03");
    assert_eq!(desks[&grid(2, 2)].seat_b.as_ref().unwrap().roll_number, "S08");

    let extra = &desks[&DeskId::Extra { index: 1 }];
    assert_eq!(extra.seat_a.as_ref().unwrap().roll_number, "S09");
    assert_eq!(extra.seat_b.as_ref().unwrap().roll_number, "S10");
    assert!(allocation.unassigned.is_empty());
}

#[test]
fn rooms_with_nobody_seated_still_appear() {
    let students = vec![student("10A001", "10A", "male")];
    let rooms = [Room::new("FIRST", 1, 1, 0), Room::new("SECOND", 2, 2, 1)];

    let allocation = ordered_allocator().allocate(students, &rooms).unwrap();

    assert_eq!(allocation.plan.rooms["FIRST"].seated_count(), 1);
    let second = &allocation.plan.rooms["SECOND"];
    assert_eq!(second.desks.len(), 5);
    assert_eq!(second.seated_count(), 0);
}

#[test]
fn audit_reports_every_violation_in_a_corrupted_plan() {
    let room = Room::new("R", 2, 1, 0);
    let mut room_plan = RoomPlan::new(&room);
    room_plan.desks.get_mut(&grid(1, 1)).unwrap().seat_a =
        Some(student("10A001", "10A", "male"));
    room_plan.desks.get_mut(&grid(1, 1)).unwrap().seat_b =
        Some(student("10A002", "10A", "female"));
    room_plan.desks.get_mut(&grid(2, 1)).unwrap().seat_a =
        Some(student("10A003", "10A", "male"));

    let mut plan = SeatingPlan::default();
    plan.rooms.insert("R".to_owned(), room_plan);

    let violations = validate_plan(&plan);
    assert_eq!(
        violations,
        vec![
            Violation::SameDeskClass {
                room_id: "R".to_owned(),
                desk: grid(1, 1),
            },
            Violation::AdjacentClass {
                room_id: "R".to_owned(),
                desk: grid(1, 1),
                seat: Seat::A,
            },
            Violation::AdjacentClass {
                room_id: "R".to_owned(),
                desk: grid(1, 1),
                seat: Seat::B,
            },
            Violation::AdjacentClass {
                room_id: "R".to_owned(),
                desk: grid(2, 1),
                seat: Seat::A,
            },
        ]
    );
    assert_eq!(
        violations[0].to_string(),
        "Room R, Desk R1C1: same class students on same desk"
    );
    assert_eq!(
        violations[1].to_string(),
        "Room R, Desk R1C1, seat_a: adjacent same class violation"
    );
}

#[test]
fn plans_export_with_the_documented_desk_shape() {
    let students = vec![student("10A001", "10A", "male")];
    let rooms = [Room::new("HALL", 1, 1, 1)];

    let allocation = ordered_allocator().allocate(students, &rooms).unwrap();
    let exported = serde_json::to_value(&allocation.plan).unwrap();

    let desk = &exported["rooms"]["HALL"]["desks"]["R1C1"];
    assert_eq!(desk["row"], 1);
    assert_eq!(desk["col"], 1);
    assert_eq!(desk["seat_a"]["roll_number"], "10A001");
    assert_eq!(desk["seat_a"]["class"], "10A");
    assert!(desk["seat_b"].is_null());
    assert_eq!(desk["is_extra"], false);

    let extra = &exported["rooms"]["HALL"]["desks"]["E1"];
    assert_eq!(extra["is_extra"], true);
    assert_eq!(extra["row"], 2);
}
