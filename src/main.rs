use linalg::{cross_product, dot_product, Matrix, Vector};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let a = Matrix::from_data(3, 3, &[1.0, 0.0, 2.0, -1.0, 5.0, 0.0, 0.0, 3.0, -9.0])?;
    println!("a =");
    a.print();
    println!("det(a) = {}", a.determinant()?);

    let mut id = Matrix::zero(3, 3);
    id.set_to_identity();
    let product = a.multiply(&id)?;
    println!("a * I == a: {}", product.approx_eq(&a, 1e-9));

    let b = Matrix::from_data(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0])?;
    println!("a * b =");
    a.multiply(&b)?.print();

    if let Err(err) = a.sum(&b) {
        log::warn!("a + b: {}", err);
    }

    let x = Vector::from(vec![3.0, 4.0, 0.0]);
    let y = Vector::from(vec![0.0, 0.0, 1.0]);
    println!("|x| = {}", x.euclidean_norm());
    println!("x / |x| = {}", x.normalized().print());
    println!("x . y = {}", dot_product(&x, &y));
    println!("x x y = {}", cross_product(&x, &y).print());

    Ok(())
}
