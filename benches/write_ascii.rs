use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use xdmf::{write_xdmf, Encoding, MeshBuffer, Point, Shape};

fn random_tet_mesh(cells: usize) -> MeshBuffer {
    let coordinates: Array2<f64> = ndarray::Array::random((cells * 4, 3), Uniform::new(0., 10.));

    let mut mesh = MeshBuffer::new(1);
    for (slot, row) in coordinates.outer_iter().enumerate() {
        mesh.insert_node(slot as u64 + 1, Point::new(row[0], row[1], row[2]));
    }
    for cell in 0..cells {
        let base = (cell * 4) as u64;
        mesh.insert_element(
            cell as u64 + 1,
            Shape::Tetra,
            [base + 1, base + 2, base + 3, base + 4],
        );
    }

    mesh
}

fn write_ascii(cells: usize) {
    let mesh = random_tet_mesh(cells);

    let writer: Vec<u8> = Vec::new();
    let mut buf_writer = std::io::BufWriter::new(writer);
    write_xdmf(&mut buf_writer, &mesh, Encoding::Ascii).unwrap();
}

fn write_ascii_bench(c: &mut Criterion) {
    c.bench_function("write ascii 1000", |b| {
        b.iter(|| write_ascii(black_box(1000)))
    });

    c.bench_function("write ascii 10000", |b| {
        b.iter(|| write_ascii(black_box(10000)))
    });
}

criterion_group!(benches, write_ascii_bench);
criterion_main!(benches);
