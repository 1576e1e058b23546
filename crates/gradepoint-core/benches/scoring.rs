use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradepoint_core::aggregate::weighted_average;
use gradepoint_core::model::{Course, Semester, Student};
use gradepoint_core::scale::grade_point;

fn make_student(semesters: usize, courses_per_semester: usize) -> Student {
    let mut student = Student::new("Bench", "B-1");
    for s in 0..semesters {
        let mut semester = Semester::new(format!("Semester {}", s + 1)).with_number(s as u32 + 1);
        for c in 0..courses_per_semester {
            let marks = ((s * 17 + c * 29) % 101) as f64;
            let credits = (c % 4 + 1) as f64;
            semester.add_course(Course::new(format!("Course {c}"), credits, marks).unwrap());
        }
        student.add_semester(semester);
    }
    student
}

fn bench_grade_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade_point");

    group.bench_function("top_band", |b| b.iter(|| grade_point(black_box(95.0))));
    group.bench_function("below_scale", |b| b.iter(|| grade_point(black_box(12.5))));
    group.bench_function("sweep_0_100", |b| {
        b.iter(|| {
            (0..=100)
                .map(|m| u32::from(grade_point(black_box(m as f64))))
                .sum::<u32>()
        })
    });

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    let pairs: Vec<(f64, f64)> = (0..1000).map(|i| ((i % 4 + 1) as f64, (i % 11) as f64)).collect();
    group.bench_function("weighted_average_1000", |b| {
        b.iter(|| weighted_average(black_box(pairs.iter().copied())))
    });

    let small = make_student(8, 6);
    group.bench_function("overall_cgpa_8x6", |b| {
        b.iter(|| black_box(&small).overall_cgpa())
    });

    let large = make_student(40, 50);
    group.bench_function("overall_cgpa_40x50", |b| {
        b.iter(|| black_box(&large).overall_cgpa())
    });

    group.finish();
}

criterion_group!(benches, bench_grade_point, bench_aggregation);
criterion_main!(benches);
