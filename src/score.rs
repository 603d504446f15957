use std::cell::RefCell;
use std::rc::Rc;

/// Handle compartido del marcador. La app vive en un solo hilo de UI, así
/// que basta con `Rc<RefCell<_>>`; cada módulo recibe un clon al crearse.
pub type ScoreHandle = Rc<RefCell<AwarenessScore>>;

/// Identificador que devuelve `subscribe`, necesario para darse de baja.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(u32)>;

/// Contador de puntos de conciencia de la sesión. Solo sube, salvo `reset`.
/// No se guarda en disco: cada arranque empieza de cero.
#[derive(Default)]
pub struct AwarenessScore {
    total: u32,
    next_id: usize,
    listeners: Vec<(ListenerId, Listener)>,
}

impl AwarenessScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle() -> ScoreHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Suma `points` y avisa a todos los observadores con el nuevo total.
    pub fn add(&mut self, points: u32) {
        self.total += points;
        self.notify();
    }

    /// Vuelve a cero incondicionalmente y avisa a los observadores.
    pub fn reset(&mut self) {
        self.total = 0;
        self.notify();
    }

    /// Registra un observador que recibe el total tras cada escritura.
    /// El observador no debe volver a entrar en el acumulador.
    pub fn subscribe(&mut self, listener: impl FnMut(u32) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&mut self) {
        let total = self.total;
        for (_, listener) in &mut self.listeners {
            listener(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AwarenessScore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn add_acumula_y_total_lo_refleja() {
        let mut score = AwarenessScore::new();
        score.add(10);
        score.add(0);
        score.add(15);
        assert_eq!(score.total(), 25);
    }

    #[test]
    fn reset_vuelve_a_cero() {
        let mut score = AwarenessScore::new();
        score.add(40);
        score.reset();
        assert_eq!(score.total(), 0);
    }

    #[test]
    fn cada_escritura_notifica_a_los_observadores() {
        let visto = Rc::new(RefCell::new(Vec::new()));
        let mut score = AwarenessScore::new();
        {
            let visto = Rc::clone(&visto);
            score.subscribe(move |total| visto.borrow_mut().push(total));
        }
        score.add(10);
        score.add(20);
        score.reset();
        assert_eq!(*visto.borrow(), vec![10, 30, 0]);
    }

    #[test]
    fn unsubscribe_detiene_los_avisos() {
        let visto = Rc::new(RefCell::new(Vec::new()));
        let mut score = AwarenessScore::new();
        let id = {
            let visto = Rc::clone(&visto);
            score.subscribe(move |total| visto.borrow_mut().push(total))
        };
        score.add(5);
        score.unsubscribe(id);
        score.add(5);
        assert_eq!(*visto.borrow(), vec![5]);
    }

    #[test]
    fn varios_observadores_ven_el_mismo_total() {
        let a = Rc::new(RefCell::new(0));
        let b = Rc::new(RefCell::new(0));
        let mut score = AwarenessScore::new();
        {
            let a = Rc::clone(&a);
            score.subscribe(move |total| *a.borrow_mut() = total);
        }
        {
            let b = Rc::clone(&b);
            score.subscribe(move |total| *b.borrow_mut() = total);
        }
        score.add(35);
        assert_eq!(*a.borrow(), 35);
        assert_eq!(*b.borrow(), 35);
    }
}
