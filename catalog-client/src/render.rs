use crate::form::ProductForm;
use catalog::product::Product;

pub const HELP: &str = "\
Commands:
  list              reload and show all products
  name <text>       set the form name
  price <number>    set the form price
  submit            add or update the product in the form
  edit <id>         load a listed product into the form
  delete <id>       delete a product
  new               clear the form
  help              show this help
  quit              exit";

pub fn product_line(product: &Product) -> String {
    format!("{} - ${:.2}", product.name, product.price)
}

pub fn render_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "(no products)".to_string();
    }
    products
        .iter()
        .map(|product| format!("[{}] {}", product.id, product_line(product)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_form(form: &ProductForm) -> String {
    let mode = if form.is_editing() {
        format!("editing #{}", form.id)
    } else {
        "new".to_string()
    };
    format!(
        "form ({}): name={:?} price={:?} [{}]",
        mode,
        form.name,
        form.price,
        form.submit_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".into(),
            price: 1500.0,
        }
    }

    #[test]
    fn line_has_two_decimals() {
        assert_eq!(product_line(&laptop()), "Laptop - $1500.00");
        let cheap = Product {
            id: 2,
            name: "Pen".into(),
            price: 0.5,
        };
        assert_eq!(product_line(&cheap), "Pen - $0.50");
    }

    #[test]
    fn list_shows_ids() {
        assert_eq!(render_list(&[laptop()]), "[1] Laptop - $1500.00");
        assert_eq!(render_list(&[]), "(no products)");
    }

    #[test]
    fn form_shows_label() {
        assert!(render_form(&ProductForm::new()).ends_with("[Add]"));
        assert!(render_form(&ProductForm::edit(&laptop())).contains("editing #1"));
    }
}
